//! Lexer, parser, and AST for **softcorner rule files** (`.scr`).
//!
//! A rule file is a flat list of blocks. `border` blocks carry a selector and
//! the properties of the border to draw; `page` and `element` blocks describe
//! a scene for the preview tool.
//!
//! This crate is intentionally dependency-free so editors and linters can
//! read rule files without pulling in the rasterizer.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `RuleDocument`, `Block`, `Prop`, `Value` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use softcorner_rules::parse_str;
//!
//! let src = r#"
//!     border ".card" {
//!         type: shadow
//!         corner_radius: 8
//!         shadow_width: 6
//!         shadow_color: #00000080
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! let block = &doc.blocks[0];
//! assert_eq!(block.target.as_deref(), Some(".card"));
//! assert_eq!(block.prop_f32("shadow_width"), Some(6.0));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Block, Prop, RuleDocument, Value};
pub use error::ParseError;
pub use parser::parse_str;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> RuleDocument { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    #[test] fn empty_document() { assert!(ok("").blocks.is_empty()); }
    #[test] fn empty_block() { ok("page { }"); }
    #[test] fn border_with_props() {
        let doc = ok(r##"border "#a" { type: glow  corner_radius: 4  glow_width: 3  glow_color: #ff8800ff }"##);
        let b = &doc.blocks[0];
        assert_eq!(b.kind, "border");
        assert_eq!(b.prop_str("type"), Some("glow"));
        assert_eq!(b.prop_color("glow_color"), Some([255, 136, 0, 255]));
    }
    #[test] fn several_blocks_keep_order() {
        let doc = ok(r#"
            page { width: 200 height: 100 }
            element "a" { x: 0 y: 0 width: 10 height: 10 }
            element "b" { x: 20 y: 0 width: 10 height: 10 }
        "#);
        let ids: Vec<_> = doc.blocks_of("element").filter_map(|b| b.target.as_deref()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(doc.blocks[2].line, 4);
    }
    #[test] fn last_property_wins() {
        let doc = ok("page { width: 10 width: 20 }");
        assert_eq!(doc.blocks[0].prop_f32("width"), Some(20.0));
    }
    #[test] fn block_comment() {
        ok("/* header */ border \".x\" { /* body */ corner_radius: 8 /* tail */ }");
    }
    #[test] fn line_comment() {
        ok("// top\nborder \".x\" {\n    // inside\n    corner_radius: 8\n}");
    }
    #[test] fn px_units() {
        assert_eq!(ok("page { width: 120px }").blocks[0].prop_f32("width"), Some(120.0));
    }
    #[test] fn string_edges() {
        let doc = ok(r#"border ".x" { edges: "top left" }"#);
        assert_eq!(doc.blocks[0].prop("edges"), Some(&Value::Str("top left".into())));
    }
    #[test] fn descriptor_strings() {
        assert_eq!(Value::Number(6.0).to_descriptor_string(), "6");
        assert_eq!(Value::Number(0.5).to_descriptor_string(), "0.5");
        assert_eq!(Value::Color([0, 0, 0, 128]).to_descriptor_string(), "#00000080");
        assert_eq!(Value::Ident("fade".into()).to_descriptor_string(), "fade");
    }
    #[test] fn err_bad_color() { err("page { background: #xyz }"); }
    #[test] fn err_unclosed_string() { err(r#"border "oops { }"#); }
    #[test] fn err_double_colon() { err("page { width: : 8 }"); }
    #[test] fn err_unclosed_block() {
        let e = err("page {\n  width: 8\n");
        assert!(e.message.contains("unclosed"));
    }
    #[test] fn err_position() {
        let e = err("page {\n  width 8\n}");
        assert_eq!((e.line, e.col), (2, 3));
    }
}
