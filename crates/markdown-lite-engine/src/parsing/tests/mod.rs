//! Integration tests for the parsing module.
//!
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Document,
    blocks::Block,
    inline::{Inline, parse_inline},
    invariants, parse_blocks, parse_document, parse_or_literal,
};

// Fixture-based snapshot tests

#[rstest]
#[case("end_to_end")]
#[case("fence_precedence")]
#[case("list_contiguity")]
#[case("heading_levels")]
#[case("unterminated_fence")]
fn fixtures(#[case] name: &str) {
    assert_fixture(name);
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let nodes = parse_blocks(&md);
    invariants::check_blocks(&md, &nodes);

    let blocks: Vec<Block> = nodes.into_iter().map(|n| n.block).collect();
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_debug_snapshot!(name, blocks);
    });
}

fn text(s: &str) -> Inline {
    Inline::Text(s.into())
}

fn para(s: &str) -> Block {
    Block::Paragraph {
        content: vec![text(s)],
    }
}

#[test]
fn empty_document() {
    assert!(parse_document("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_document("\n  \n\t\n").is_empty());
}

#[test]
fn heading_precedence() {
    let doc = parse_document("### x");
    assert_eq!(
        doc.blocks,
        vec![Block::Heading {
            level: 3,
            content: vec![text("x")]
        }]
    );
}

#[test]
fn list_contiguity_splits_on_blank_line() {
    let doc = parse_document("- a\n- b\n\n- c");
    assert_eq!(
        doc.blocks,
        vec![
            Block::List {
                items: vec![vec![text("a")], vec![text("b")]]
            },
            Block::List {
                items: vec![vec![text("c")]]
            },
        ]
    );
}

#[test]
fn fence_precedence_keeps_lines_verbatim() {
    let doc = parse_document("```\n# h\n* i\n```");
    assert_eq!(
        doc.blocks,
        vec![Block::CodeBlock {
            language: String::new(),
            lines: vec!["# h".into(), "* i".into()],
        }]
    );
}

#[test]
fn fence_flushes_open_paragraph() {
    let doc = parse_document("para\n```\ncode\n```");
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.blocks[0], para("para"));
}

#[test]
fn paragraph_lines_are_joined_with_newlines() {
    let doc = parse_document("one\r\ntwo\nthree");
    assert_eq!(doc.blocks, vec![para("one\ntwo\nthree")]);
}

#[test]
fn list_items_are_inline_parsed() {
    let doc = parse_document("- `a` b\n- **c**");
    assert_eq!(
        doc.blocks,
        vec![Block::List {
            items: vec![
                vec![Inline::Code("a".into()), text(" b")],
                vec![Inline::Bold("c".into())],
            ]
        }]
    );
}

#[test]
fn code_block_lines_are_not_inline_parsed() {
    let doc = parse_document("```\n**x**\n```");
    assert_eq!(
        doc.blocks,
        vec![Block::CodeBlock {
            language: String::new(),
            lines: vec!["**x**".into()],
        }]
    );
}

#[test]
fn heading_without_text_has_no_content() {
    let doc = parse_document("# ");
    assert_eq!(
        doc.blocks,
        vec![Block::Heading {
            level: 1,
            content: vec![]
        }]
    );
}

#[test]
fn literal_fallback_for_blank_input() {
    let doc = parse_or_literal("  \n");
    assert_eq!(doc.blocks, vec![para("  \n")]);
}

#[test]
fn literal_fallback_for_empty_input() {
    let doc = parse_or_literal("");
    assert_eq!(doc, Document::literal(""));
    assert_eq!(doc.blocks, vec![Block::Paragraph { content: vec![] }]);
}

#[test]
fn literal_fallback_leaves_real_documents_alone() {
    let src = "# T\nbody";
    assert_eq!(parse_or_literal(src), parse_document(src));
}

#[rstest]
#[case("**a** and *b*")]
#[case("*a **b** c*")]
#[case("`x` **y** *z*")]
#[case("a `` b")]
#[case("***")]
fn inline_invariants_hold(#[case] src: &str) {
    invariants::check_inline(src, &parse_inline(src));
}

#[test]
fn document_serializes_with_type_tags() {
    let doc = parse_document("## Hi");
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["blocks"][0]["type"], "heading");
    assert_eq!(json["blocks"][0]["level"], 2);
    assert_eq!(json["blocks"][0]["content"][0]["type"], "text");
    assert_eq!(json["blocks"][0]["content"][0]["text"], "Hi");
}

#[test]
fn document_iterates_blocks_in_order() {
    let doc = parse_document("# a\n\nb");
    let kinds: Vec<_> = doc.iter().map(Block::kind_name).collect();
    assert_eq!(kinds, vec!["heading", "paragraph"]);
    assert_eq!((&doc).into_iter().count(), 2);
}
