//! Tests for the record browser engine and table component.

use super::*;
use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
struct Account {
    id: u32,
    name: String,
    owner: String,
    status: String,
}

fn account(id: u32, name: &str, owner: &str, status: &str) -> Account {
    Account {
        id,
        name: name.to_string(),
        owner: owner.to_string(),
        status: status.to_string(),
    }
}

fn accounts() -> Vec<Account> {
    vec![
        account(1, "Acme Corp", "Rahim", "Active"),
        account(2, "Skyline", "Nadia", "Suspended"),
        account(3, "Blue Lagoon Resort", "Karim", "Active"),
        account(4, "Harbor View", "ACME Holdings", "Pending"),
    ]
}

fn columns() -> Vec<Column<Account>> {
    vec![
        Column::new("id", "ID", |a: &Account| a.id.to_string()),
        Column::new("name", "Name", |a: &Account| a.name.clone())
            .searchable(|a: &Account| a.name.clone()),
        Column::new("owner", "Owner", |a: &Account| a.owner.clone())
            .searchable(|a: &Account| a.owner.clone()),
        Column::new("status", "Status", |a: &Account| a.status.clone()),
    ]
}

fn ids(records: &[&Account]) -> Vec<u32> {
    records.iter().map(|a| a.id).collect()
}

fn press(model: &mut Model<Account>, key: KeyCode) -> Option<bubbletea_rs::Cmd> {
    let msg = Box::new(KeyMsg {
        key,
        modifiers: KeyModifiers::NONE,
    }) as Msg;
    model.update(msg)
}

fn type_text(model: &mut Model<Account>, text: &str) {
    for c in text.chars() {
        press(model, KeyCode::Char(c));
    }
}

fn plain(s: &str) -> String {
    strip_ansi_escapes::strip_str(s)
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

mod engine_tests {
    use super::*;

    #[test]
    fn test_empty_query_passes_everything_through() {
        let mut engine = SearchEngine::new(accounts(), columns());
        assert_eq!(ids(&engine.visible_records()), vec![1, 2, 3, 4]);

        engine.set_query("   \t ");
        assert_eq!(ids(&engine.visible_records()), vec![1, 2, 3, 4]);
        assert!(!engine.is_filtering());
    }

    #[test]
    fn test_matching_is_or_across_searchable_columns() {
        let mut engine = SearchEngine::new(accounts(), columns());
        // "acme" hits the name of #1 and the owner of #4.
        engine.set_query("acme");
        assert_eq!(ids(&engine.visible_records()), vec![1, 4]);
    }

    #[test]
    fn test_query_is_case_insensitive_and_trimmed() {
        let mut engine = SearchEngine::new(accounts(), columns());
        engine.set_query("ACME");
        let upper = ids(&engine.visible_records());
        engine.set_query("  acme ");
        let lower = ids(&engine.visible_records());
        assert_eq!(upper, lower);
        assert_eq!(engine.query(), "  acme ");
        assert_eq!(engine.normalized_query(), "acme");
    }

    #[test]
    fn test_columns_without_projection_never_match() {
        let mut engine = SearchEngine::new(accounts(), columns());
        // Status is rendered but not searchable.
        engine.set_query("suspended");
        assert!(engine.visible_records().is_empty());
        // ID is rendered but not searchable either.
        engine.set_query("3");
        assert!(engine.visible_records().is_empty());
    }

    #[test]
    fn test_hidden_columns_still_search() {
        let mut engine = SearchEngine::new(accounts(), columns());
        engine.set_query("nadia");
        assert_eq!(ids(&engine.visible_records()), vec![2]);

        engine.toggle_column("owner");
        assert!(!engine.is_column_visible("owner"));
        assert_eq!(ids(&engine.visible_records()), vec![2]);
        let labels: Vec<_> = engine.visible_columns().iter().map(|c| c.id()).collect();
        assert_eq!(labels, ["id", "name", "status"]);
    }

    #[test]
    fn test_toggle_is_self_inverse_for_every_column() {
        let mut engine = SearchEngine::new(accounts(), columns());
        engine.set_column_visible("status", false);
        for id in ["id", "name", "owner", "status"] {
            let before = engine.is_column_visible(id);
            engine.toggle_column(id);
            assert_ne!(engine.is_column_visible(id), before);
            engine.toggle_column(id);
            assert_eq!(engine.is_column_visible(id), before);
        }
    }

    #[test]
    fn test_unknown_column_toggle_is_noop() {
        let mut engine = SearchEngine::new(accounts(), columns());
        engine.toggle_column("ghost");
        engine.set_column_visible("ghost", false);
        assert_eq!(engine.visibility().len(), 4);
        assert!(!engine.visibility().contains("ghost"));
        assert_eq!(engine.visible_columns().len(), 4);
    }

    #[test]
    fn test_visible_columns_keep_definition_order() {
        let mut engine = SearchEngine::new(accounts(), columns());
        engine.toggle_column("name");
        engine.toggle_column("id");
        engine.toggle_column("name");
        let order: Vec<_> = engine.visible_columns().iter().map(|c| c.id()).collect();
        assert_eq!(order, ["name", "owner", "status"]);
    }

    #[test]
    fn test_concrete_acme_scenario() {
        #[derive(Debug, PartialEq)]
        struct Company {
            id: u32,
            name: String,
        }

        let records = vec![
            Company { id: 1, name: "Acme Corp".into() },
            Company { id: 2, name: "Skyline".into() },
        ];
        let columns = vec![Column::new("name", "Name", |c: &Company| c.name.clone())
            .searchable(|c: &Company| c.name.clone())];

        let mut engine = SearchEngine::new(records, columns);
        engine.set_query("acme");
        let visible = engine.visible_records();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0], &Company { id: 1, name: "Acme Corp".into() });
    }

    #[test]
    fn test_set_records_rederives_view() {
        let mut engine = SearchEngine::new(accounts(), columns());
        engine.set_query("resort");
        assert_eq!(ids(&engine.visible_records()), vec![3]);

        let mut more = accounts();
        more.push(account(5, "Sunset Resort", "Mina", "Active"));
        engine.set_records(more);
        assert_eq!(ids(&engine.visible_records()), vec![3, 5]);
        assert_eq!(engine.total(), 5);
        assert_eq!(engine.visible_indices(), &[2, 4]);
    }

    #[test]
    fn test_set_columns_keeps_surviving_visibility() {
        let mut engine = SearchEngine::new(accounts(), columns());
        engine.toggle_column("status");
        engine.set_query("rahim");
        assert_eq!(engine.len(), 1);

        // Drop the owner column: "rahim" no longer matches anything.
        let reduced: Vec<_> = columns()
            .into_iter()
            .filter(|c| c.id() != "owner")
            .collect();
        engine.set_columns(reduced);
        assert!(engine.is_empty());
        assert!(!engine.is_column_visible("status"));
        assert!(!engine.visibility().contains("owner"));
    }

    #[test]
    fn test_source_collection_is_not_mutated() {
        let mut engine = SearchEngine::new(accounts(), columns());
        engine.set_query("skyline");
        assert_eq!(engine.records(), accounts().as_slice());
    }

    #[test]
    fn test_fuzzy_matcher_is_opt_in() {
        let mut engine = SearchEngine::new(accounts(), columns());
        engine.set_query("blr");
        assert!(engine.is_empty());

        engine.set_matcher(QueryMatcher::Fuzzy);
        assert_eq!(ids(&engine.visible_records()), vec![3]);
    }

    #[test]
    fn test_no_columns_means_nothing_matches_a_query() {
        let mut engine: SearchEngine<Account> = SearchEngine::new(accounts(), Vec::new());
        assert_eq!(engine.len(), 4);
        engine.set_query("acme");
        assert!(engine.is_empty());
        assert!(engine.visible_columns().is_empty());
    }
}

mod component_tests {
    use super::*;
    use crate::Component;

    fn table() -> Model<Account> {
        Model::new(accounts(), columns()).with_title("Accounts")
    }

    #[test]
    fn test_new_model_defaults() {
        let model = table();
        assert_eq!(model.search_state(), SearchState::Idle);
        assert_eq!(model.cursor(), 0);
        assert_eq!(model.len(), 4);
        assert_eq!(model.selected_record().map(|a| a.id), Some(1));
    }

    #[test]
    fn test_typing_filters_live() {
        let mut model = table();
        press(&mut model, KeyCode::Char('/'));
        assert!(model.focused());

        type_text(&mut model, "sky");
        assert_eq!(model.search_state(), SearchState::Editing);
        assert_eq!(ids(&model.visible_records()), vec![2]);

        press(&mut model, KeyCode::Backspace);
        press(&mut model, KeyCode::Backspace);
        press(&mut model, KeyCode::Backspace);
        assert_eq!(model.len(), 4);
    }

    #[test]
    fn test_enter_keeps_query_and_esc_clears_it() {
        let mut model = table();
        press(&mut model, KeyCode::Char('/'));
        type_text(&mut model, "acme");
        press(&mut model, KeyCode::Enter);
        assert_eq!(model.search_state(), SearchState::Applied);
        assert_eq!(ids(&model.visible_records()), vec![1, 4]);

        press(&mut model, KeyCode::Esc);
        assert_eq!(model.search_state(), SearchState::Idle);
        assert_eq!(model.len(), 4);
        assert_eq!(model.engine().query(), "");
    }

    #[test]
    fn test_search_keys_are_text_while_editing() {
        let mut model = table();
        press(&mut model, KeyCode::Char('/'));
        // 'q' and digits must not quit or toggle columns while typing.
        assert!(press(&mut model, KeyCode::Char('q')).is_none());
        press(&mut model, KeyCode::Char('1'));
        assert_eq!(model.engine().query(), "q1");
        assert!(model.engine().is_column_visible("id"));
    }

    #[test]
    fn test_digit_keys_toggle_columns_by_position() {
        let mut model = table();
        press(&mut model, KeyCode::Char('2'));
        assert!(!model.engine().is_column_visible("name"));
        press(&mut model, KeyCode::Char('2'));
        assert!(model.engine().is_column_visible("name"));

        // Past the last column: nothing happens.
        press(&mut model, KeyCode::Char('9'));
        assert_eq!(model.visible_columns().len(), 4);
    }

    #[test]
    fn test_cursor_stays_within_visible_records() {
        let mut model = table();
        press(&mut model, KeyCode::Up);
        assert_eq!(model.cursor(), 0);
        press(&mut model, KeyCode::Char('G'));
        assert_eq!(model.cursor(), 3);
        press(&mut model, KeyCode::Down);
        assert_eq!(model.cursor(), 3);

        model.set_query("acme");
        assert_eq!(model.cursor(), 0);
        press(&mut model, KeyCode::Char('j'));
        assert_eq!(model.selected_record().map(|a| a.id), Some(4));
    }

    #[test]
    fn test_whitespace_edits_keep_selection() {
        let mut model = table();
        model.set_query("a");
        assert_eq!(model.len(), 4);
        press(&mut model, KeyCode::Char('j'));
        press(&mut model, KeyCode::Char('j'));
        assert_eq!(model.cursor(), 2);

        press(&mut model, KeyCode::Char('/'));
        press(&mut model, KeyCode::Char(' '));
        assert_eq!(model.engine().query(), "a ");
        assert_eq!(model.cursor(), 2);
        press(&mut model, KeyCode::Backspace);
        assert_eq!(model.cursor(), 2);

        press(&mut model, KeyCode::Char('c'));
        assert_eq!(ids(&model.visible_records()), vec![1, 4]);
        assert_eq!(model.cursor(), 0);
    }

    #[test]
    fn test_set_records_clamps_cursor() {
        let mut model = table();
        press(&mut model, KeyCode::End);
        model.set_records(accounts().into_iter().take(2).collect());
        assert_eq!(model.cursor(), 1);
        model.set_records(Vec::new());
        assert_eq!(model.cursor(), 0);
        assert!(model.selected_record().is_none());
    }

    #[test]
    fn test_quit_key_returns_command() {
        let mut model = table();
        assert!(press(&mut model, KeyCode::Char('q')).is_some());
    }

    #[test]
    fn test_view_shows_only_visible_columns() {
        let mut model = table();
        model.toggle_column("status");
        let view = plain(&model.view());
        let header = view.lines().nth(1).unwrap_or_default();
        assert!(header.contains("ID"));
        assert!(header.contains("Owner"));
        assert!(!header.contains("Status"));
        assert!(view.contains("> 1"));
        assert!(view.contains("Acme Corp"));
        assert!(view.contains("4 records"));
        assert!(view.contains("4:[ ] Status"));
    }

    #[test]
    fn test_view_empty_state() {
        let mut model = table().with_empty_message("Nothing here.");
        model.set_query("zzz");
        let view = plain(&model.view());
        assert!(view.contains("Nothing here."));
        assert!(view.contains("0 of 4 records"));
        assert!(view.contains("Accounts (filtered: 0)"));
    }

    #[test]
    fn test_view_search_prompt_and_placeholder() {
        let mut model = table().with_placeholder("Find an account...");
        model.focus();
        let view = plain(&model.view());
        assert!(view.starts_with("Search: Find an account..."));

        type_text(&mut model, "sky");
        let view = plain(&model.view());
        assert!(view.starts_with("Search: sky"));
        assert!(view.contains("enter apply search"));
    }

    #[test]
    fn test_row_actions_render_last() {
        let model = table().with_row_actions(|a: &Account| format!("[edit #{}]", a.id));
        let view = plain(&model.view());
        let first_row = view
            .lines()
            .find(|line| line.contains("Acme Corp"))
            .unwrap_or_default();
        assert!(first_row.ends_with("[edit #1]"));
    }

    #[test]
    fn test_long_cells_are_truncated() {
        let model = table().with_max_cell_width(8);
        let view = plain(&model.view());
        assert!(view.contains("Blue La…"));
        assert!(!view.contains("Blue Lagoon Resort"));
    }

    #[test]
    fn test_config_applies_titles_and_matcher() {
        let config = crate::config::BrowserConfig {
            title: "Guests".to_string(),
            matcher: QueryMatcher::Fuzzy,
            item_name: "guest".to_string(),
            item_name_plural: "guests".to_string(),
            ..Default::default()
        };
        let mut model = table().with_config(&config);
        model.set_query("hvw");
        assert_eq!(ids(&model.visible_records()), vec![4]);
        let view = plain(&model.view());
        assert!(view.contains("Guests (filtered: 1)"));
        assert!(view.contains("1 of 4 guests"));
    }

    #[test]
    fn test_short_help_tracks_search_state() {
        use crate::key::KeyMap;

        let mut model = table();
        assert_eq!(model.short_help().len(), 5);
        model.focus();
        let help: Vec<_> = model
            .short_help()
            .iter()
            .map(|b| b.help().desc.clone())
            .collect();
        assert_eq!(help, ["apply search", "clear search"]);
    }
}
