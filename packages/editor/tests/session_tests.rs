//! Session lifecycle tests: open, dispatch, edit, undo/redo, save.
//!
//! This covers:
//! - Resuming stored pages (renormalization, id continuation, validation)
//! - No-op policy for unknown ids and same-value updates
//! - The apply_edit boundary (pinned identity, kind guard)
//! - Selection tracking across removal and undo
//! - The save payload the external store receives

use pagecraft_blocks::{
    Block, BlockContent, BlockSettings, DesignSettings, FaqContent, HeroContent, PaddingSize,
    RichtextContent,
};
use pagecraft_editor::{Action, BlockKind, EditSession, EditorError, PageMeta, PageRecord};

fn session_with(kinds: &[BlockKind]) -> EditSession {
    let mut session = EditSession::new("landing-home");
    for &kind in kinds {
        session.dispatch(Action::Add { kind });
    }
    session
}

fn ids(session: &EditSession) -> Vec<String> {
    session.blocks().iter().map(|b| b.id.clone()).collect()
}

fn stored_block(id: &str, order: usize) -> Block {
    Block {
        id: id.to_string(),
        content: BlockContent::Richtext(RichtextContent {
            html: format!("<p>{}</p>", id),
        }),
        settings: BlockSettings::default(),
        order,
    }
}

#[test]
fn test_open_resumes_id_counter_past_stored_ids() {
    let first = session_with(&[BlockKind::Hero, BlockKind::Faq, BlockKind::Contact]);
    let stored_ids = ids(&first);
    let record = first.save_record(&PageMeta::new("Home", ""));

    let mut reopened = EditSession::open("landing-home", record).unwrap();
    reopened.dispatch(Action::Add {
        kind: BlockKind::Gallery,
    });

    let new_id = reopened.blocks().last().unwrap().id.clone();
    assert!(!stored_ids.contains(&new_id));
    assert!(new_id.ends_with("-4"));
}

#[test]
fn test_open_renormalizes_stored_order() {
    let record = PageRecord {
        blocks: vec![
            stored_block("x-1", 5),
            stored_block("x-2", 0),
            stored_block("x-3", 9),
        ],
        design_settings: DesignSettings::default(),
        rendered_html: String::new(),
    };

    let session = EditSession::open("landing-home", record).unwrap();

    // Array order is the truth; stale order fields are rewritten
    assert_eq!(ids(&session), vec!["x-1", "x-2", "x-3"]);
    let orders: Vec<_> = session.blocks().iter().map(|b| b.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
    assert!(session.document().validate().is_ok());
}

#[test]
fn test_open_rejects_duplicate_block_ids() {
    let record = PageRecord {
        blocks: vec![stored_block("x-1", 0), stored_block("x-1", 1)],
        design_settings: DesignSettings::default(),
        rendered_html: String::new(),
    };

    let result = EditSession::open("landing-home", record);
    assert!(matches!(result, Err(EditorError::Document(_))));
}

#[test]
fn test_open_json_round_trip() -> anyhow::Result<()> {
    let mut first = session_with(&[BlockKind::Hero, BlockKind::Packages]);
    first.set_primary_color("#14532d");

    let record = first.save_record(&PageMeta::new("Umrah Packages", ""));
    assert!(record.rendered_html.contains("<!DOCTYPE html>"));

    let json = record.to_json()?;
    let reopened = EditSession::open_json("landing-home", &json)?;

    assert_eq!(ids(&reopened), ids(&first));
    assert_eq!(reopened.design().primary_color, "#14532d");
    Ok(())
}

#[test]
fn test_remove_unknown_id_leaves_no_history_entry() {
    let mut session = session_with(&[BlockKind::Hero]);

    let changed = session.dispatch(Action::Remove {
        id: "missing".to_string(),
    });

    assert!(!changed);
    assert_eq!(session.blocks().len(), 1);

    // Only the add is in history
    assert!(session.undo());
    assert!(!session.undo());
}

#[test]
fn test_set_visibility_commits_once_and_same_value_is_noop() {
    let mut session = session_with(&[BlockKind::Hero]);
    let id = ids(&session)[0].clone();

    assert!(session.dispatch(Action::SetVisibility {
        id: id.clone(),
        visible: false,
    }));
    assert!(!session.blocks()[0].is_visible());

    // Hiding an already-hidden block changes nothing
    assert!(!session.dispatch(Action::SetVisibility {
        id: id.clone(),
        visible: false,
    }));

    assert!(session.undo());
    assert!(session.blocks()[0].is_visible());
}

#[test]
fn test_update_content_replaces_same_kind_payload() {
    let mut session = session_with(&[BlockKind::Hero]);
    let id = ids(&session)[0].clone();

    let changed = session.dispatch(Action::UpdateContent {
        id: id.clone(),
        content: BlockContent::Hero(HeroContent {
            title: "Ramadan Departures Now Open".to_string(),
            ..HeroContent::default()
        }),
    });
    assert!(changed);

    match &session.blocks()[0].content {
        BlockContent::Hero(hero) => assert_eq!(hero.title, "Ramadan Departures Now Open"),
        other => panic!("expected hero content, got {:?}", other),
    }
}

#[test]
fn test_update_content_of_different_kind_is_rejected() {
    let mut session = session_with(&[BlockKind::Hero]);
    let id = ids(&session)[0].clone();
    let before = session.blocks()[0].clone();

    let changed = session.dispatch(Action::UpdateContent {
        id,
        content: BlockContent::Faq(FaqContent::default()),
    });

    assert!(!changed);
    assert_eq!(session.blocks()[0], before);
}

#[test]
fn test_update_settings_commits() {
    let mut session = session_with(&[BlockKind::Faq]);
    let id = ids(&session)[0].clone();

    let changed = session.dispatch(Action::UpdateSettings {
        id,
        settings: BlockSettings {
            padding_top: PaddingSize::Large,
            background_color: Some("#f8fafc".to_string()),
            ..BlockSettings::default()
        },
    });

    assert!(changed);
    assert_eq!(session.blocks()[0].settings.padding_top, PaddingSize::Large);
    assert!(session.can_undo());
}

#[test]
fn test_undo_redo_round_trip() {
    let mut session = session_with(&[BlockKind::Hero, BlockKind::Faq]);
    let both = ids(&session);

    assert!(session.undo());
    assert_eq!(ids(&session), both[..1].to_vec());

    assert!(session.redo());
    assert_eq!(ids(&session), both);
    assert!(!session.redo());
}

#[test]
fn test_new_action_after_undo_discards_redo_path() {
    let mut session = session_with(&[BlockKind::Hero, BlockKind::Faq]);

    session.undo();
    session.dispatch(Action::Add {
        kind: BlockKind::Packages,
    });

    assert!(!session.can_redo());
    assert!(!session.redo());
    assert_eq!(session.blocks().len(), 2);
}

#[test]
fn test_undo_restores_removed_block() {
    let mut session = session_with(&[BlockKind::Hero]);
    let before = session.blocks()[0].clone();

    session.dispatch(Action::Remove {
        id: before.id.clone(),
    });
    assert!(session.blocks().is_empty());

    assert!(session.undo());
    assert_eq!(session.blocks()[0], before);
}

#[test]
fn test_selection_is_dropped_when_block_disappears() {
    let mut session = session_with(&[BlockKind::Hero]);
    let id = ids(&session)[0].clone();
    assert_eq!(session.selected(), Some(id.as_str()));

    session.dispatch(Action::Remove { id });
    assert!(session.selected().is_none());

    // Restoring the block does not restore focus
    session.undo();
    assert!(session.selected().is_none());
}

#[test]
fn test_selection_is_dropped_by_undo_past_creation() {
    let mut session = session_with(&[BlockKind::Hero, BlockKind::Faq]);
    let faq_id = ids(&session)[1].clone();
    assert_eq!(session.selected(), Some(faq_id.as_str()));

    session.undo();
    assert!(session.selected().is_none());
}

#[test]
fn test_apply_edit_pins_identity_and_order() {
    let mut session = session_with(&[BlockKind::Hero, BlockKind::Faq]);
    let faq_id = ids(&session)[1].clone();

    let changed = session.apply_edit(&faq_id, |mut block| {
        block.id = "hijacked".to_string();
        block.order = 99;
        if let BlockContent::Faq(faq) = &mut block.content {
            faq.title = "Before You Travel".to_string();
        }
        block
    });

    assert!(changed);
    let edited = &session.blocks()[1];
    assert_eq!(edited.id, faq_id);
    assert_eq!(edited.order, 1);
    match &edited.content {
        BlockContent::Faq(faq) => assert_eq!(faq.title, "Before You Travel"),
        other => panic!("expected faq content, got {:?}", other),
    }
}

#[test]
fn test_apply_edit_rejects_kind_change() {
    let mut session = session_with(&[BlockKind::Hero]);
    let id = ids(&session)[0].clone();
    let before = session.blocks()[0].clone();

    let changed = session.apply_edit(&id, |mut block| {
        block.content = BlockContent::Faq(FaqContent::default());
        block
    });

    assert!(!changed);
    assert_eq!(session.blocks()[0], before);
}

#[test]
fn test_apply_edit_noops_spend_no_history() {
    let mut session = session_with(&[BlockKind::Hero]);
    let id = ids(&session)[0].clone();

    assert!(!session.apply_edit("missing", |block| block));
    assert!(!session.apply_edit(&id, |block| block));

    // Still exactly one entry to undo (the add)
    assert!(session.undo());
    assert!(!session.undo());
}

#[test]
fn test_design_survives_undo() {
    let mut session = session_with(&[BlockKind::Hero]);
    session.set_primary_color("#b45309");
    session.set_animations_enabled(false);

    session.undo();
    assert!(session.blocks().is_empty());
    assert_eq!(session.design().primary_color, "#b45309");
    assert!(!session.design().animations_enabled);
}

#[test]
fn test_save_record_bundles_blocks_design_and_html() {
    let mut session = session_with(&[BlockKind::Hero]);
    session.set_primary_color("#b45309");

    let record = session.save_record(&PageMeta::new("Umrah Packages", "Guided journeys"));

    assert_eq!(record.blocks.len(), 1);
    assert_eq!(record.design_settings.primary_color, "#b45309");
    assert!(record.rendered_html.contains("<title>Umrah Packages</title>"));
    assert!(record.rendered_html.contains("--pc-primary: #b45309;"));
}

#[test]
fn test_preview_matches_saved_html() {
    let session = session_with(&[BlockKind::Hero, BlockKind::Contact]);
    let meta = PageMeta::new("Home", "A travel page");

    assert_eq!(session.preview_html(&meta), session.save_record(&meta).rendered_html);
}

#[test]
fn test_duplicate_copy_is_isolated_from_its_source() {
    let mut session = session_with(&[BlockKind::Hero]);
    let original_id = ids(&session)[0].clone();

    session.dispatch(Action::Duplicate {
        id: original_id.clone(),
    });
    assert_eq!(session.blocks().len(), 2);

    let copy_id = ids(&session)[1].clone();
    assert_ne!(copy_id, original_id);
    assert_eq!(session.blocks()[0].content, session.blocks()[1].content);

    session.apply_edit(&copy_id, |mut block| {
        if let BlockContent::Hero(hero) = &mut block.content {
            hero.title = "Edited Copy".to_string();
        }
        block
    });

    match &session.blocks()[0].content {
        BlockContent::Hero(hero) => assert_ne!(hero.title, "Edited Copy"),
        other => panic!("expected hero content, got {:?}", other),
    }
}
