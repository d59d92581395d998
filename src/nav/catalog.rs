//! Section-specific navigation trees.
//!
//! A dashboard shows a different module tree depending on where the user
//! is: the hotel pages get the hotel modules, the transport pages the
//! transport modules, and everything else the default module list. A
//! [`Catalog`] holds those trees keyed by section prefix and picks one for
//! a path.
//!
//! Section prefixes are normalized like hrefs. A prefix that normalizes to
//! nothing (`""` or `/`) is rejected; put a tree meant for every path in
//! the fallback instead.
//!
//! Catalogs can be loaded from TOML or JSON:
//!
//! ```toml
//! [[fallback]]
//! id = "dashboard"
//! title = "Dashboard"
//! items = [{ title = "Overview", href = "/dashboard" }]
//!
//! [[sections]]
//! prefix = "/hotel"
//!
//! [[sections.groups]]
//! id = "hotel"
//! title = "Hotel"
//! items = [
//!     { title = "Overview", href = "/hotel" },
//!     { title = "Rooms", href = "/hotel/rooms", badge = "3" },
//! ]
//! ```

use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::path::{normalize_path, path_matches, MatchMode};
use super::tree::{NavGroup, NavItem};
use crate::error::{Error, Result};

/// A tree used for every path under `prefix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Path prefix selecting this tree.
    pub prefix: String,
    /// The tree.
    #[serde(default)]
    pub groups: Vec<NavGroup>,
}

/// Navigation trees keyed by section prefix, with a fallback tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    sections: Vec<Section>,
    #[serde(default)]
    fallback: Vec<NavGroup>,
}

impl Catalog {
    /// Creates a catalog with only a fallback tree.
    pub fn new(fallback: Vec<NavGroup>) -> Self {
        Self {
            sections: Vec::new(),
            fallback,
        }
    }

    /// Adds a tree for `prefix`.
    ///
    /// Returns [`Error::EmptySectionPrefix`] for a prefix such as `/` that
    /// normalizes to nothing, and [`Error::DuplicateSection`] when another
    /// section already uses the same normalized prefix.
    pub fn with_section(mut self, prefix: impl Into<String>, groups: Vec<NavGroup>) -> Result<Self> {
        let prefix = prefix.into();
        if normalize_path(&prefix).is_empty() {
            return Err(Error::EmptySectionPrefix { prefix });
        }
        if self.prefix_taken(&prefix) {
            return Err(Error::DuplicateSection { prefix });
        }
        self.sections.push(Section { prefix, groups });
        Ok(self)
    }

    /// Parses a TOML catalog.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(s)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses a JSON catalog.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(s)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a catalog file. Files ending in `.json` are parsed as JSON,
    /// anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_toml_str(&text)?
        };
        tracing::debug!(
            path = %path.display(),
            sections = catalog.sections.len(),
            "loaded navigation catalog"
        );
        Ok(catalog)
    }

    /// The built-in dashboard module trees.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// The section whose prefix best matches `path`, if any.
    ///
    /// The longest matching prefix wins; ties go to the first section.
    pub fn section_for(&self, path: &str, mode: MatchMode) -> Option<&Section> {
        let path = normalize_path(path);
        let mut best: Option<(&Section, usize)> = None;
        for section in &self.sections {
            let prefix = normalize_path(&section.prefix);
            if path_matches(path, prefix, mode) && best.map_or(true, |(_, len)| prefix.len() > len) {
                best = Some((section, prefix.len()));
            }
        }
        best.map(|(section, _)| section)
    }

    /// The tree to show for `path`: the best matching section, else the
    /// fallback.
    pub fn tree_for(&self, path: &str, mode: MatchMode) -> &[NavGroup] {
        self.section_for(path, mode)
            .map_or(self.fallback.as_slice(), |section| section.groups.as_slice())
    }

    /// All sections in definition order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The tree used when no section matches.
    pub fn fallback(&self) -> &[NavGroup] {
        &self.fallback
    }

    fn prefix_taken(&self, prefix: &str) -> bool {
        let prefix = normalize_path(prefix);
        self.sections
            .iter()
            .any(|s| normalize_path(&s.prefix) == prefix)
    }

    fn validate(&self) -> Result<()> {
        for (i, section) in self.sections.iter().enumerate() {
            let prefix = normalize_path(&section.prefix);
            if prefix.is_empty() {
                return Err(Error::EmptySectionPrefix {
                    prefix: section.prefix.clone(),
                });
            }
            if self.sections[..i]
                .iter()
                .any(|s| normalize_path(&s.prefix) == prefix)
            {
                return Err(Error::DuplicateSection {
                    prefix: section.prefix.clone(),
                });
            }
        }
        Ok(())
    }
}

type GroupDef = (&'static str, &'static str, &'static [(&'static str, &'static str)]);

const DEFAULT_MODULES: &[GroupDef] = &[
    (
        "dashboard",
        "Dashboard",
        &[
            ("Overview", "/dashboard"),
            ("Reports", "/dashboard/reports"),
        ],
    ),
    (
        "hotel",
        "Hotel",
        &[
            ("Overview", "/hotel"),
            ("Rooms", "/hotel/rooms"),
            ("Housekeeping", "/hotel/housekeeping"),
            ("Maintenance", "/hotel/maintenance"),
            ("Reservations", "/hotel/reservations"),
            ("Front Desk", "/hotel/frontdesk"),
            ("Guests", "/hotel/guests"),
        ],
    ),
    (
        "transport",
        "Transport",
        &[
            ("Fleet", "/transport/fleet"),
            ("Trips", "/transport/trips"),
            ("Drivers", "/transport/drivers"),
            ("Logistics", "/transport/logistics"),
        ],
    ),
    (
        "aviation",
        "Aviation",
        &[
            ("Overview", "/aviation"),
            ("Flights", "/aviation/flights"),
            ("Passengers", "/aviation/passengers"),
            ("Schedules", "/aviation/schedules"),
        ],
    ),
    (
        "property",
        "Property Management",
        &[
            ("Overview", "/property"),
            ("Units", "/property/units"),
            ("Tenants", "/property/tenants"),
            ("Leases", "/property/leases"),
            ("Maintenance", "/property/maintenance"),
        ],
    ),
    (
        "city",
        "City / Resort Management",
        &[
            ("Overview", "/city"),
            ("Zones", "/city/zones"),
            ("Utilities", "/city/utilities"),
            ("Staff", "/city/staff"),
        ],
    ),
    (
        "training",
        "Training",
        &[
            ("Overview", "/training"),
            ("Courses", "/training/courses"),
            ("Sessions", "/training/sessions"),
            ("Trainees", "/training/trainees"),
        ],
    ),
    (
        "accounting",
        "Accounting",
        &[
            ("Overview", "/accounting"),
            ("Chart of Accounts", "/accounting/coa"),
            ("Journal Entries", "/accounting/journal"),
            ("Billing", "/accounting/billing"),
            ("Invoices", "/accounting/invoices"),
        ],
    ),
    (
        "hr",
        "Human Resources",
        &[
            ("Overview", "/hr"),
            ("Employees", "/hr/employees"),
            ("Attendance", "/hr/attendance"),
            ("Payroll", "/hr/payroll"),
            ("Leaves", "/hr/leaves"),
        ],
    ),
    (
        "core",
        "Core ERP",
        &[
            ("Overview", "/core"),
            ("Inventory", "/core/inventory"),
            ("Vendors", "/core/vendors"),
            ("Procurement", "/core/procurement"),
        ],
    ),
];

const HOTEL_MODULES: &[GroupDef] = &[
    (
        "hotel",
        "Hotel & Resort Management",
        &[
            ("Overview", "/hotel"),
            ("Rooms", "/hotel/rooms"),
            ("Housekeeping", "/hotel/housekeeping"),
            ("Maintenance", "/hotel/maintenance"),
        ],
    ),
    (
        "frontdesk",
        "Front Desk & Reservations",
        &[
            ("Walk-in & Phone Reservations", "/hotel/frontdesk/walkin"),
            ("Check-in / Check-out", "/hotel/frontdesk/checkin"),
            ("Guest Stay Management", "/hotel/frontdesk/stay"),
            ("Room Assignment", "/hotel/frontdesk/assignment"),
            ("Folio Creation & Updates", "/hotel/frontdesk/folio"),
        ],
    ),
    (
        "roominventory",
        "Room Inventory",
        &[
            ("Room Status", "/hotel/rooms/status"),
            ("Room Types & Rates", "/hotel/rooms/types"),
            ("Floor & Building Mapping", "/hotel/rooms/floors"),
        ],
    ),
    (
        "housekeeping",
        "Housekeeping",
        &[
            ("Task Assignment", "/hotel/housekeeping/tasks"),
            ("Task Scheduling", "/hotel/housekeeping/schedule"),
            ("Status Updates", "/hotel/housekeeping/status"),
            ("Turnover Tracking", "/hotel/housekeeping/turnover"),
        ],
    ),
    (
        "maintenance",
        "Maintenance / Engineering",
        &[
            ("Work Orders", "/hotel/maintenance/workorders"),
            ("Issue Tracking", "/hotel/maintenance/issues"),
            ("Asset Management", "/hotel/maintenance/assets"),
            ("Technician Assignment", "/hotel/maintenance/technicians"),
        ],
    ),
    (
        "fnb",
        "Food & Beverage (F&B) + POS",
        &[
            ("POS Billing", "/hotel/fnb/pos"),
            ("Menu Setup", "/hotel/fnb/menu"),
            ("KOT / BOT Management", "/hotel/fnb/kotbot"),
            ("Post to Guest Folio", "/hotel/fnb/postings"),
        ],
    ),
    (
        "billing",
        "Billing & Folios",
        &[
            ("Folio Management", "/hotel/billing/folios"),
            ("Room Charges", "/hotel/billing/roomcharges"),
            ("Additional Charges", "/hotel/billing/addons"),
            ("Payments & Tax Handling", "/hotel/billing/payments"),
        ],
    ),
    (
        "inventory",
        "Inventory & Purchasing",
        &[
            ("Stock & Consumables", "/hotel/inventory/stocks"),
            ("Item Tracking", "/hotel/inventory/items"),
            ("Purchase Orders", "/hotel/inventory/po"),
        ],
    ),
    (
        "staff",
        "Staff & Role Management",
        &[
            ("User Accounts", "/hotel/staff/users"),
            ("Roles & Permissions", "/hotel/staff/roles"),
            ("Duty Roster", "/hotel/staff/roster"),
        ],
    ),
    (
        "reports",
        "Reports & Analytics",
        &[
            ("Occupancy Reports", "/hotel/reports/occupancy"),
            ("Daily Revenue Reports", "/hotel/reports/revenue"),
            ("Housekeeping Performance", "/hotel/reports/housekeeping"),
            ("Department Summaries", "/hotel/reports/department"),
        ],
    ),
];

const TRANSPORT_MODULES: &[GroupDef] = &[
    (
        "transport",
        "Ride Sharing & Transportation",
        &[
            ("Overview", "/dashboard/transport"),
            ("Ride Booking (On-demand)", "/dashboard/transport/ride-booking"),
            ("Scheduled Trips", "/dashboard/transport/scheduled"),
            ("Live Tracking (GPS)", "/dashboard/transport/live-tracking"),
            ("Drivers", "/dashboard/transport/drivers"),
            ("Driver Roster & Assignment", "/dashboard/transport/drivers/assignments"),
            ("Fleet Management", "/dashboard/transport/fleet"),
            ("Maintenance & Inspections", "/dashboard/transport/fleet/maintenance"),
            ("Fuel Logs", "/dashboard/transport/fleet/fuel-logs"),
            ("Fare & Billing", "/dashboard/transport/billing"),
            ("Trip History & Analytics", "/dashboard/transport/analytics"),
            ("Reports", "/dashboard/transport/reports"),
        ],
    ),
    (
        "transport-fleet",
        "Fleet & Maintenance",
        &[
            ("Fleet Overview", "/dashboard/transport/fleet"),
            ("Maintenance Work Orders", "/dashboard/transport/fleet/maintenance"),
            ("Inspection Logs", "/dashboard/transport/fleet/inspections"),
            ("Fuel & Expense Logs", "/dashboard/transport/fleet/fuel-logs"),
        ],
    ),
    (
        "transport-ops",
        "Operations",
        &[
            ("Dispatch Board", "/dashboard/transport/ops/dispatch"),
            ("Driver Assignments", "/dashboard/transport/ops/assignments"),
            ("Schedules", "/dashboard/transport/ops/schedules"),
        ],
    ),
    (
        "transport-billing",
        "Billing & Analytics",
        &[
            ("Fare Rules & Setup", "/dashboard/transport/billing/fare-setup"),
            ("Invoices & Payments", "/dashboard/transport/billing/invoices"),
            ("Trip Analytics", "/dashboard/transport/analytics"),
            ("Revenue Reports", "/dashboard/transport/reports/revenue"),
        ],
    ),
];

const AVIATION_MODULES: &[GroupDef] = &[
    (
        "aviation",
        "Aviation Operations",
        &[
            ("Overview", "/aviation"),
            ("Live Flights", "/aviation/live"),
            ("Flight Schedule", "/aviation/schedule"),
            ("Flight Dispatch", "/aviation/dispatch"),
        ],
    ),
    (
        "airportops",
        "Airport Operations",
        &[
            ("Check-in & Boarding", "/aviation/airport/checkin"),
            ("Gate Management", "/aviation/airport/gates"),
            ("Terminal Operations", "/aviation/airport/terminal"),
            ("Passenger Movement", "/aviation/airport/passengers"),
            ("Lost & Found", "/aviation/airport/lostfound"),
        ],
    ),
    (
        "runway",
        "Runway & Ground Control",
        &[
            ("Runway Status", "/aviation/runway/status"),
            ("Ground Movements", "/aviation/runway/ground"),
            ("Clearance & Safety", "/aviation/runway/safety"),
        ],
    ),
    (
        "fleet",
        "Aircraft Fleet Management",
        &[
            ("Aircraft List", "/aviation/fleet"),
            ("Maintenance Status", "/aviation/fleet/maintenance"),
            ("Parts & Components", "/aviation/fleet/parts"),
            ("Technical Logs (TechLog)", "/aviation/fleet/techlog"),
        ],
    ),
    (
        "crew",
        "Crew & Staff",
        &[
            ("Flight Crew", "/aviation/crew/flight"),
            ("Cabin Crew", "/aviation/crew/cabin"),
            ("Duty Roster", "/aviation/crew/roster"),
            ("Training & Certification", "/aviation/crew/training"),
        ],
    ),
    (
        "atc",
        "ATC & Navigation",
        &[
            ("ATC Logs", "/aviation/atc/logs"),
            ("Flight Paths", "/aviation/atc/paths"),
            ("Weather & METAR", "/aviation/atc/weather"),
            ("Communication Records", "/aviation/atc/comms"),
        ],
    ),
    (
        "baggage",
        "Baggage & Cargo",
        &[
            ("Baggage Handling", "/aviation/baggage/handling"),
            ("Cargo Management", "/aviation/baggage/cargo"),
            ("Load & Balance", "/aviation/baggage/load"),
        ],
    ),
    (
        "billing",
        "Billing & Aviation Finance",
        &[
            ("Flight Charges", "/aviation/billing/flightcharges"),
            ("Fuel Billing", "/aviation/billing/fuel"),
            ("Landing Fees", "/aviation/billing/landing"),
            ("Cargo Billing", "/aviation/billing/cargo"),
        ],
    ),
    (
        "reports",
        "Reports & Analytics",
        &[
            ("Flight Statistics", "/aviation/reports/flights"),
            ("Delay Reports", "/aviation/reports/delays"),
            ("Operational Efficiency", "/aviation/reports/efficiency"),
            ("Crew Performance", "/aviation/reports/crew"),
        ],
    ),
];

const PROPERTY_MODULES: &[GroupDef] = &[
    (
        "property",
        "Property Management",
        &[
            ("Overview", "/property"),
            ("Units", "/property/units"),
            ("Tenants", "/property/tenants"),
            ("Leases & Contracts", "/property/leases"),
            ("Rent Collection", "/property/rent"),
        ],
    ),
    (
        "maintenance",
        "Maintenance & Engineering",
        &[
            ("Work Orders", "/property/maintenance/workorders"),
            ("Issue Tracking", "/property/maintenance/issues"),
            ("Asset Management", "/property/maintenance/assets"),
            ("Technician Scheduling", "/property/maintenance/technicians"),
        ],
    ),
    (
        "inspections",
        "Inspections & Compliance",
        &[
            ("Property Inspections", "/property/inspections"),
            ("Move-in / Move-out Checklist", "/property/inspections/moveinout"),
            ("Safety & Compliance", "/property/inspections/safety"),
        ],
    ),
    (
        "finance",
        "Billing & Finance",
        &[
            ("Invoices", "/property/billing/invoices"),
            ("Payments", "/property/billing/payments"),
            ("Expense Tracking", "/property/billing/expenses"),
            ("Utility Billing", "/property/billing/utilities"),
        ],
    ),
    (
        "community",
        "Community & Facilities",
        &[
            ("Facilities", "/property/facilities"),
            ("Bookings", "/property/bookings"),
            ("Announcements", "/property/announcements"),
            ("Complaints & Requests", "/property/requests"),
        ],
    ),
    (
        "staff",
        "Staff & Roles",
        &[
            ("Staff Directory", "/property/staff"),
            ("Roles & Permissions", "/property/staff/roles"),
            ("Duty Roster", "/property/staff/roster"),
        ],
    ),
];

const CITY_RESORT_MODULES: &[GroupDef] = &[
    (
        "city_resort",
        "City & Resort Management",
        &[
            ("Overview", "/city"),
            ("Zones & Areas", "/city/zones"),
            ("Facilities", "/city/facilities"),
            ("Resort Dashboard", "/city/resort"),
        ],
    ),
    (
        "facility_ops",
        "Facility Operations",
        &[
            ("Pools & Recreation", "/city/facilities/pools"),
            ("Restaurants & Lounges", "/city/facilities/restaurants"),
            ("Sports & Activities", "/city/facilities/sports"),
            ("Event Spaces", "/city/facilities/events"),
        ],
    ),
    (
        "guest_services",
        "Guest & Resident Services",
        &[
            ("Guest Directory", "/city/guests"),
            ("Check-in & Registration", "/city/guests/checkin"),
            ("Requests & Complaints", "/city/guests/requests"),
            ("Membership & Loyalty", "/city/guests/membership"),
        ],
    ),
    (
        "events",
        "Events & Scheduling",
        &[
            ("Events Calendar", "/city/events"),
            ("Bookings", "/city/events/bookings"),
            ("Resource Allocation", "/city/events/resources"),
        ],
    ),
    (
        "maintenance",
        "Maintenance & Infrastructure",
        &[
            ("Maintenance Requests", "/city/maintenance"),
            ("Utilities & Services", "/city/maintenance/utilities"),
            ("Asset Tracking", "/city/maintenance/assets"),
            ("Groundskeeping", "/city/maintenance/grounds"),
        ],
    ),
    (
        "environment",
        "Environment & Sustainability",
        &[
            ("Green Zones", "/city/environment/greenzones"),
            ("Waste Management", "/city/environment/waste"),
            ("Energy Usage", "/city/environment/energy"),
            ("Water Supply", "/city/environment/water"),
        ],
    ),
    (
        "city_finance",
        "Billing & Finance",
        &[
            ("Billing Overview", "/city/billing"),
            ("Service Charges", "/city/billing/services"),
            ("Facility Billing", "/city/billing/facilities"),
            ("Reports", "/city/billing/reports"),
        ],
    ),
    (
        "security",
        "Security & Governance",
        &[
            ("Access Control", "/city/security/access"),
            ("CCTV Monitoring", "/city/security/cctv"),
            ("Incident Reports", "/city/security/incidents"),
            ("Emergency Protocols", "/city/security/emergency"),
        ],
    ),
];

const TRAINING_MODULES: &[GroupDef] = &[
    (
        "training",
        "Training Management",
        &[
            ("Overview", "/training"),
            ("Dashboard", "/training/dashboard"),
            ("Learning Paths", "/training/paths"),
            ("Categories", "/training/categories"),
        ],
    ),
    (
        "courses",
        "Courses & Content",
        &[
            ("All Courses", "/training/courses"),
            ("Course Builder", "/training/courses/builder"),
            ("Modules & Lessons", "/training/courses/modules"),
            ("Assessments", "/training/courses/assessments"),
        ],
    ),
    (
        "sessions",
        "Sessions & Scheduling",
        &[
            ("Session Calendar", "/training/sessions"),
            ("Workshops", "/training/sessions/workshops"),
            ("Webinars & Live Classes", "/training/sessions/live"),
            ("Training Venues", "/training/sessions/venues"),
        ],
    ),
    (
        "trainees",
        "Trainees & Enrollment",
        &[
            ("Trainee Directory", "/training/trainees"),
            ("Enrollments", "/training/trainees/enrollments"),
            ("Attendance Tracking", "/training/trainees/attendance"),
            ("Feedback & Reviews", "/training/trainees/feedback"),
        ],
    ),
    (
        "exams",
        "Exams & Certifications",
        &[
            ("Exam Center", "/training/exams"),
            ("MCQ & Written Tests", "/training/exams/tests"),
            ("Practical Exams", "/training/exams/practical"),
            ("Certification Issuance", "/training/exams/certificates"),
        ],
    ),
    (
        "reports",
        "Reports & Analytics",
        &[
            ("Learner Progress", "/training/reports/progress"),
            ("Course Performance", "/training/reports/courses"),
            ("Instructor Performance", "/training/reports/instructors"),
            ("Session Analytics", "/training/reports/sessions"),
        ],
    ),
];

const ACCOUNTING_MODULES: &[GroupDef] = &[
    (
        "accounting",
        "Accounting & Finance",
        &[
            ("Overview", "/accounting"),
            ("Financial Dashboard", "/accounting/dashboard"),
            ("Chart of Accounts", "/accounting/coa"),
            ("General Ledger", "/accounting/gl"),
            ("Journal Entries", "/accounting/journal"),
        ],
    ),
    (
        "billing",
        "Billing & Invoicing",
        &[
            ("Invoices", "/accounting/invoices"),
            ("Customer Billing", "/accounting/billing/customers"),
            ("Vendor Billing", "/accounting/billing/vendors"),
            ("Recurring Billing", "/accounting/billing/recurring"),
            ("Credit Notes", "/accounting/billing/credits"),
        ],
    ),
    (
        "payments",
        "Payments & Receipts",
        &[
            ("Receive Payments", "/accounting/payments/receive"),
            ("Make Payments", "/accounting/payments/make"),
            ("Bank Register", "/accounting/payments/banks"),
            ("Cash Register", "/accounting/payments/cash"),
            ("Reconciliations", "/accounting/payments/reconcile"),
        ],
    ),
    (
        "taxation",
        "Taxation & Compliance",
        &[
            ("Tax Setup (VAT/GST)", "/accounting/tax/setup"),
            ("Tax Reports", "/accounting/tax/reports"),
            ("Withholding Tax", "/accounting/tax/wht"),
            ("Regulatory Filing", "/accounting/tax/filing"),
        ],
    ),
    (
        "reports",
        "Reports & Statements",
        &[
            ("Balance Sheet", "/accounting/reports/balancesheet"),
            ("Profit & Loss", "/accounting/reports/pl"),
            ("Cash Flow", "/accounting/reports/cashflow"),
            ("A/R & A/P", "/accounting/reports/ar-ap"),
            ("Trial Balance", "/accounting/reports/trialbalance"),
        ],
    ),
];

const CORE_ERP_MODULES: &[GroupDef] = &[
    (
        "core",
        "Core ERP",
        &[
            ("Overview", "/core"),
            ("ERP Dashboard", "/core/dashboard"),
            ("Master Data", "/core/masterdata"),
            ("Audit Logs", "/core/audit"),
        ],
    ),
    (
        "inventory",
        "Inventory Management",
        &[
            ("Inventory Overview", "/core/inventory"),
            ("Products & SKUs", "/core/inventory/products"),
            ("Stock Levels", "/core/inventory/stock"),
            ("Stock Movements", "/core/inventory/movements"),
            ("Warehouses", "/core/inventory/warehouses"),
            ("Batch & Serial Tracking", "/core/inventory/tracking"),
        ],
    ),
    (
        "procurement",
        "Procurement",
        &[
            ("Purchase Requests", "/core/procurement/requests"),
            ("Purchase Orders", "/core/procurement/orders"),
            ("Goods Received Notes", "/core/procurement/grn"),
            ("Vendor Quotations", "/core/procurement/quotations"),
            ("Vendor Performance", "/core/procurement/vendors"),
        ],
    ),
    (
        "assets",
        "Asset Management",
        &[
            ("Assets Overview", "/core/assets"),
            ("Asset Register", "/core/assets/register"),
            ("Depreciation", "/core/assets/depreciation"),
            ("Asset Movement", "/core/assets/movement"),
            ("Asset Disposal", "/core/assets/disposal"),
        ],
    ),
    (
        "maintenance",
        "Maintenance",
        &[
            ("Maintenance Dashboard", "/core/maintenance"),
            ("Work Orders", "/core/maintenance/workorders"),
            ("Preventive Maintenance", "/core/maintenance/preventive"),
            ("Maintenance Logs", "/core/maintenance/logs"),
            ("Technician Assignment", "/core/maintenance/technicians"),
        ],
    ),
    (
        "vendors",
        "Vendor Management",
        &[
            ("Vendor List", "/core/vendors"),
            ("Vendor Categories", "/core/vendors/categories"),
            ("Contracts", "/core/vendors/contracts"),
            ("Payment Terms", "/core/vendors/paymentterms"),
        ],
    ),
    (
        "compliance",
        "Compliance & Policies",
        &[
            ("Policies & SOP", "/core/compliance/policies"),
            ("Internal Controls", "/core/compliance/controls"),
            ("Regulatory Compliance", "/core/compliance/regulatory"),
            ("Risk Management", "/core/compliance/risk"),
        ],
    ),
    (
        "system",
        "System Administration",
        &[
            ("System Settings", "/core/system/settings"),
            ("Integrations", "/core/system/integrations"),
            ("User Access Control", "/core/system/access"),
            ("API Keys", "/core/system/api"),
            ("Backups", "/core/system/backups"),
        ],
    ),
];

/// Section prefixes of the built-in catalog and the tree each one uses.
const BUILTIN_SECTIONS: &[(&str, &[GroupDef])] = &[
    ("/hotel", HOTEL_MODULES),
    ("/dashboard/hotel", HOTEL_MODULES),
    ("/transport", TRANSPORT_MODULES),
    ("/dashboard/transport", TRANSPORT_MODULES),
    ("/aviation", AVIATION_MODULES),
    ("/property", PROPERTY_MODULES),
    ("/city", CITY_RESORT_MODULES),
    ("/training", TRAINING_MODULES),
    ("/accounting", ACCOUNTING_MODULES),
    ("/core", CORE_ERP_MODULES),
];

fn build(defs: &[GroupDef]) -> Vec<NavGroup> {
    defs.iter()
        .map(|(id, title, items)| {
            let items = items
                .iter()
                .map(|(title, href)| NavItem::new(*title, *href))
                .collect();
            NavGroup::new(*id, *title, items)
        })
        .collect()
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    sections: BUILTIN_SECTIONS
        .iter()
        .map(|(prefix, defs)| Section {
            prefix: prefix.to_string(),
            groups: build(defs),
        })
        .collect(),
    fallback: build(DEFAULT_MODULES),
});

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str) -> NavGroup {
        NavGroup::new(id, id, vec![NavItem::new(id, format!("/{}", id))])
    }

    #[test]
    fn test_builtin_picks_section_tree() {
        let catalog = Catalog::builtin();
        let tree = catalog.tree_for("/hotel/frontdesk/walkin", MatchMode::Prefix);
        assert_eq!(tree[1].id, "frontdesk");

        let tree = catalog.tree_for("/hr/payroll", MatchMode::Prefix);
        assert_eq!(tree[0].id, "dashboard");
        assert_eq!(tree.len(), 10);
    }

    #[test]
    fn test_builtin_covers_every_module_section() {
        let catalog = Catalog::builtin();
        let first_group = |path: &str| catalog.tree_for(path, MatchMode::Prefix)[0].id.clone();

        assert_eq!(first_group("/transport/fleet"), "transport");
        assert_eq!(catalog.tree_for("/transport/fleet", MatchMode::Prefix).len(), 4);
        assert_eq!(first_group("/dashboard/transport/drivers"), "transport");
        assert_eq!(first_group("/dashboard/hotel"), "hotel");
        assert_eq!(first_group("/property/units"), "property");
        assert_eq!(first_group("/city/zones"), "city_resort");
        assert_eq!(first_group("/training/courses"), "training");
        assert_eq!(first_group("/accounting/coa"), "accounting");
        assert_eq!(first_group("/core/inventory"), "core");
        assert_eq!(first_group("/dashboard/reports"), "dashboard");
        assert_eq!(catalog.sections().len(), 10);
    }

    #[test]
    fn test_builtin_section_trees_are_complete() {
        let catalog = Catalog::builtin();
        let ids = |path: &str| -> Vec<String> {
            catalog
                .tree_for(path, MatchMode::Prefix)
                .iter()
                .map(|g| g.id.clone())
                .collect()
        };

        let hotel = ids("/hotel");
        assert!(hotel.iter().any(|id| id == "inventory"));
        assert!(hotel.iter().any(|id| id == "staff"));
        assert_eq!(hotel.last().map(String::as_str), Some("reports"));

        let aviation = ids("/aviation");
        for id in ["runway", "atc", "baggage", "billing", "reports"] {
            assert!(aviation.iter().any(|g| g == id), "missing aviation group {id}");
        }
    }

    #[test]
    fn test_root_section_prefix_rejected() {
        let err = Catalog::default().with_section("/", Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptySectionPrefix { prefix } if prefix == "/"));

        let toml = r#"
            [[sections]]
            prefix = " / "
        "#;
        assert!(matches!(
            Catalog::from_toml_str(toml),
            Err(Error::EmptySectionPrefix { .. })
        ));
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("nav.JSON");
        std::fs::write(
            &json_path,
            r#"{"fallback": [{"id": "home", "title": "Home", "items": [{"title": "Start", "href": "/start"}]}]}"#,
        )
        .unwrap();
        let catalog = Catalog::load(&json_path).unwrap();
        assert_eq!(catalog.fallback()[0].id, "home");

        let toml_path = dir.path().join("nav.toml");
        std::fs::write(
            &toml_path,
            "[[sections]]\nprefix = \"/city\"\n\n[[sections.groups]]\nid = \"city\"\ntitle = \"City\"\n",
        )
        .unwrap();
        let catalog = Catalog::load(&toml_path).unwrap();
        assert_eq!(catalog.tree_for("/city/zones", MatchMode::Prefix)[0].id, "city");

        // JSON content behind a .toml name is parsed as TOML and fails.
        let wrong = dir.path().join("nav2.toml");
        std::fs::copy(&json_path, &wrong).unwrap();
        assert!(matches!(Catalog::load(&wrong), Err(Error::Toml(_))));
    }

    #[test]
    fn test_longest_section_prefix_wins() {
        let catalog = Catalog::new(vec![group("home")])
            .with_section("/hotel", vec![group("hotel")])
            .and_then(|c| c.with_section("/hotel/fnb", vec![group("fnb")]))
            .unwrap();

        assert_eq!(catalog.tree_for("/hotel/fnb/menu", MatchMode::Prefix)[0].id, "fnb");
        assert_eq!(catalog.tree_for("/hotel/rooms", MatchMode::Prefix)[0].id, "hotel");
        assert_eq!(catalog.tree_for("/city", MatchMode::Prefix)[0].id, "home");
    }

    #[test]
    fn test_section_matching_follows_mode() {
        let catalog = Catalog::new(vec![group("home")])
            .with_section("/transport", vec![group("transport")])
            .unwrap();
        assert_eq!(
            catalog.tree_for("/transportation", MatchMode::Prefix)[0].id,
            "transport"
        );
        assert_eq!(
            catalog.tree_for("/transportation", MatchMode::Segment)[0].id,
            "home"
        );
    }

    #[test]
    fn test_duplicate_prefix_rejected() {
        let err = Catalog::default()
            .with_section("/hotel", Vec::new())
            .and_then(|c| c.with_section("/hotel/", Vec::new()))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateSection { prefix } if prefix == "/hotel/"));
    }

    #[test]
    fn test_from_toml_str() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[fallback]]
            id = "dashboard"
            title = "Dashboard"
            items = [{ title = "Overview", href = "/dashboard" }]

            [[sections]]
            prefix = "/hotel"

            [[sections.groups]]
            id = "hotel"
            title = "Hotel"
            items = [
                { title = "Overview", href = "/hotel" },
                { title = "Rooms", href = "/hotel/rooms", badge = "3" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(catalog.sections().len(), 1);
        let tree = catalog.tree_for("/hotel/rooms", MatchMode::Prefix);
        assert_eq!(tree[0].items[1].badge.as_deref(), Some("3"));
        assert_eq!(catalog.fallback()[0].items[0].href.as_deref(), Some("/dashboard"));
    }

    #[test]
    fn test_from_json_str() {
        let json = serde_json::json!({
            "sections": [
                { "prefix": "/city", "groups": [
                    { "id": "city", "title": "City", "items": [
                        { "title": "Zones", "href": "/city/zones" },
                        { "title": "Unlinked" }
                    ]}
                ]}
            ]
        });
        let catalog = Catalog::from_json_str(&json.to_string()).unwrap();
        let tree = catalog.tree_for("/city/zones", MatchMode::Segment);
        assert_eq!(tree[0].items[1].href, None);
        assert!(catalog.fallback().is_empty());
    }

    #[test]
    fn test_loaders_reject_duplicates_and_bad_input() {
        let json = r#"{"sections": [{"prefix": "/a"}, {"prefix": "/a/"}]}"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(Error::DuplicateSection { .. })
        ));
        assert!(matches!(Catalog::from_json_str("{"), Err(Error::Json(_))));
        assert!(matches!(
            Catalog::from_toml_str("sections = 3"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = Catalog::load("/nonexistent/catalog.toml").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/catalog.toml"));
    }
}
