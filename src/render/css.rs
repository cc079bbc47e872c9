//! Built-in CSS text renderer.

use log::trace;

use super::{CssRenderer, RenderError, RenderOptions, StyleTree};
use crate::style::{Declarations, Rule, StyleUnit};

/// Renders style trees to compact or pretty printed CSS.
///
/// Output for a unit under `.btn`, in order:
///
/// 1. `.btn{...}` for the unit's own declarations
/// 2. `.btn:hover{...}` for each pseudo class
/// 3. `.btn > span{...}` for each combinator
/// 4. `@media q{...}` and `@supports q{...}` blocks, each containing the
///    nested unit rendered under `.btn`
///
/// Rules without declarations are left out.
///
/// ```rust
/// use herb::{CssRenderer, CssTextRenderer, RenderOptions, Selector, StyleTree, StyleUnit};
///
/// let unit = StyleUnit::new().add("color", "red").pseudo("hover", [("color", "blue")]);
/// let css = CssTextRenderer
///     .render(
///         &StyleTree::Unit { selector: &Selector::class("a"), unit: &unit },
///         &RenderOptions::default(),
///     )
///     .unwrap();
/// assert_eq!(css, ".a{color:red}.a:hover{color:blue}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CssTextRenderer;

impl CssRenderer for CssTextRenderer {
    fn render(&self, tree: &StyleTree<'_>, options: &RenderOptions) -> Result<String, RenderError> {
        let blocks = match tree {
            StyleTree::Unit { selector, unit } => {
                let mut blocks = Vec::new();
                expand_unit(&selector.to_css(), unit, &[], options, &mut blocks)?;
                blocks
            }
            StyleTree::Rules(rules) => expand_rules(rules, options)?,
            StyleTree::Keyframes { name, frames } => {
                let mut prelude = String::from("@keyframes ");
                // Writing into a String cannot fail.
                let _ = cssparser::serialize_identifier(name, &mut prelude);
                vec![Block::At {
                    prelude,
                    children: expand_rules(frames, options)?,
                }]
            }
        };

        let css = write_blocks(&blocks, options.pretty_print);
        trace!("rendered {} bytes of css", css.len());
        Ok(css)
    }
}

/// Intermediate CSS structure, serialized once expansion succeeded.
#[derive(Debug)]
enum Block {
    Rule {
        selector: String,
        declarations: Vec<(String, String)>,
    },
    At {
        prelude: String,
        children: Vec<Block>,
    },
}

fn expand_rules(rules: &[Rule], options: &RenderOptions) -> Result<Vec<Block>, RenderError> {
    let mut blocks = Vec::new();
    for rule in rules {
        expand_unit(&rule.selector, &rule.unit, &[], options, &mut blocks)?;
    }
    Ok(blocks)
}

fn expand_unit(
    selector: &str,
    unit: &StyleUnit,
    inherited_vendors: &[String],
    options: &RenderOptions,
    out: &mut Vec<Block>,
) -> Result<(), RenderError> {
    let vendors = effective_vendors(unit, inherited_vendors, options);

    push_rule(out, selector.to_string(), &unit.style, &vendors);

    for (name, declarations) in &unit.pseudo {
        push_rule(out, format!("{}:{}", selector, name), declarations, &vendors);
    }

    for (key, declarations) in &unit.combinators {
        let joiner = match key.tag.as_str() {
            ">" => " > ",
            "+" => " + ",
            "-" | "~" => " ~ ",
            "descendant" | " " => " ",
            _ => {
                return Err(RenderError::UnsupportedCombinator {
                    combinator: key.tag.clone(),
                    elements: key.elements.clone(),
                    style: format!("{:?}", declarations),
                })
            }
        };
        let mut combined = selector.to_string();
        for element in &key.elements {
            combined.push_str(joiner);
            combined.push_str(element);
        }
        push_rule(out, combined, declarations, &vendors);
    }

    for (query, nested) in &unit.media {
        let mut children = Vec::new();
        expand_unit(selector, nested, &vendors, options, &mut children)?;
        if !children.is_empty() {
            out.push(Block::At {
                prelude: format!("@media {}", query.to_css(options.pretty_print)),
                children,
            });
        }
    }

    for (query, nested) in &unit.supports {
        let mut children = Vec::new();
        expand_unit(selector, nested, &vendors, options, &mut children)?;
        if !children.is_empty() {
            out.push(Block::At {
                prelude: format!("@supports {}", query.to_css(options.pretty_print)),
                children,
            });
        }
    }

    Ok(())
}

/// Vendors to prefix this unit's declarations with.
///
/// A unit asking for prefixes uses its own vendor list, or the configured
/// one when it lists none. Nested units inherit their parent's vendors.
fn effective_vendors(unit: &StyleUnit, inherited: &[String], options: &RenderOptions) -> Vec<String> {
    if unit.prefix {
        if unit.vendors.is_empty() {
            options.vendors.clone()
        } else {
            unit.vendors.clone()
        }
    } else if !inherited.is_empty() {
        inherited.to_vec()
    } else if options.auto_prefix {
        options.vendors.clone()
    } else {
        Vec::new()
    }
}

fn push_rule(out: &mut Vec<Block>, selector: String, declarations: &Declarations, vendors: &[String]) {
    if declarations.is_empty() {
        return;
    }
    let mut rendered = Vec::with_capacity(declarations.len() * (vendors.len() + 1));
    for (property, value) in declarations {
        let value = value.to_css();
        for vendor in vendors {
            rendered.push((format!("-{}-{}", vendor, property), value.clone()));
        }
        rendered.push((property.clone(), value));
    }
    out.push(Block::Rule {
        selector,
        declarations: rendered,
    });
}

fn write_blocks(blocks: &[Block], pretty: bool) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if pretty && i > 0 {
            out.push('\n');
        }
        if pretty {
            write_pretty(block, 0, &mut out);
        } else {
            write_compact(block, &mut out);
        }
    }
    out
}

fn write_compact(block: &Block, out: &mut String) {
    match block {
        Block::Rule {
            selector,
            declarations,
        } => {
            out.push_str(selector);
            out.push('{');
            for (i, (property, value)) in declarations.iter().enumerate() {
                if i > 0 {
                    out.push(';');
                }
                out.push_str(property);
                out.push(':');
                out.push_str(value);
            }
            out.push('}');
        }
        Block::At { prelude, children } => {
            out.push_str(prelude);
            out.push('{');
            for child in children {
                write_compact(child, out);
            }
            out.push('}');
        }
    }
}

fn write_pretty(block: &Block, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match block {
        Block::Rule {
            selector,
            declarations,
        } => {
            out.push_str(&indent);
            out.push_str(selector);
            out.push_str(" {\n");
            for (property, value) in declarations {
                out.push_str(&indent);
                out.push_str("  ");
                out.push_str(property);
                out.push_str(": ");
                out.push_str(value);
                out.push_str(";\n");
            }
            out.push_str(&indent);
            out.push('}');
        }
        Block::At { prelude, children } => {
            out.push_str(&indent);
            out.push_str(prelude);
            out.push_str(" {\n");
            for child in children {
                write_pretty(child, depth + 1, out);
                out.push('\n');
            }
            out.push_str(&indent);
            out.push('}');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{CombinatorKey, MediaQuery, Selector, SupportsQuery, Value};

    fn compact() -> RenderOptions {
        RenderOptions::default()
    }

    fn pretty() -> RenderOptions {
        RenderOptions {
            pretty_print: true,
            ..RenderOptions::default()
        }
    }

    fn render_class(name: &str, unit: &StyleUnit, options: &RenderOptions) -> Result<String, RenderError> {
        CssTextRenderer.render(
            &StyleTree::Unit {
                selector: &Selector::class(name),
                unit,
            },
            options,
        )
    }

    #[test]
    fn test_simple_rule() {
        let unit = StyleUnit::new().add("color", "red").add("margin", 0);
        assert_eq!(
            render_class("a", &unit, &compact()).unwrap(),
            ".a{color:red;margin:0}"
        );
    }

    #[test]
    fn test_escaped_selector() {
        let unit = StyleUnit::new().add("color", "red");
        assert_eq!(
            render_class("ns/button", &unit, &compact()).unwrap(),
            r".ns\/button{color:red}"
        );
    }

    #[test]
    fn test_id_selector() {
        let unit = StyleUnit::new().add("color", "red");
        let css = CssTextRenderer
            .render(
                &StyleTree::Unit {
                    selector: &Selector::id("main"),
                    unit: &unit,
                },
                &compact(),
            )
            .unwrap();
        assert_eq!(css, "#main{color:red}");
    }

    #[test]
    fn test_empty_unit_renders_nothing() {
        assert_eq!(render_class("a", &StyleUnit::new(), &compact()).unwrap(), "");
    }

    #[test]
    fn test_pretty_rule() {
        let unit = StyleUnit::new().add("color", "red").add("margin", 0);
        assert_eq!(
            render_class("a", &unit, &pretty()).unwrap(),
            ".a {\n  color: red;\n  margin: 0;\n}"
        );
    }

    #[test]
    fn test_pseudo_rules() {
        let unit = StyleUnit::new()
            .pseudo("hover", [("color", "blue")])
            .pseudo(":before", [("content", Value::string(""))]);
        assert_eq!(
            render_class("a", &unit, &compact()).unwrap(),
            ".a:hover{color:blue}.a::before{content:\"\"}"
        );
    }

    #[test]
    fn test_media_block() {
        let unit = StyleUnit::new().add("color", "red").media(
            MediaQuery::new().feature("max-width", Value::px(800.0)),
            StyleUnit::new().add("color", "blue"),
        );
        assert_eq!(
            render_class("a", &unit, &compact()).unwrap(),
            ".a{color:red}@media (max-width:800px){.a{color:blue}}"
        );
    }

    #[test]
    fn test_pretty_media_block() {
        let unit = StyleUnit::new().media(
            MediaQuery::new().media_type("screen"),
            StyleUnit::new().add("color", "blue"),
        );
        assert_eq!(
            render_class("a", &unit, &pretty()).unwrap(),
            "@media screen {\n  .a {\n    color: blue;\n  }\n}"
        );
    }

    #[test]
    fn test_supports_block() {
        let unit = StyleUnit::new().supports(
            SupportsQuery::new().condition("display", "grid"),
            StyleUnit::new().add("display", "grid"),
        );
        assert_eq!(
            render_class("a", &unit, &compact()).unwrap(),
            "@supports (display:grid){.a{display:grid}}"
        );
    }

    #[test]
    fn test_empty_media_block_is_skipped() {
        let unit = StyleUnit::new().media(MediaQuery::new().media_type("print"), StyleUnit::new());
        assert_eq!(render_class("a", &unit, &compact()).unwrap(), "");
    }

    #[test]
    fn test_combinators() {
        let unit = StyleUnit::new()
            .combinator(CombinatorKey::new(">", ["div"]), [("margin", 0)])
            .combinator(CombinatorKey::new("+", ["p"]), [("margin", 1)])
            .combinator(CombinatorKey::new("-", ["span"]), [("margin", 2)])
            .combinator(CombinatorKey::new("descendant", ["a", "b"]), [("margin", 3)]);
        assert_eq!(
            render_class("x", &unit, &compact()).unwrap(),
            ".x > div{margin:0}.x + p{margin:1}.x ~ span{margin:2}.x a b{margin:3}"
        );
    }

    #[test]
    fn test_unsupported_combinator() {
        let unit = StyleUnit::new().combinator(CombinatorKey::new("<", ["div"]), [("margin", 0)]);
        let err = render_class("x", &unit, &compact()).unwrap_err();
        let RenderError::UnsupportedCombinator {
            combinator,
            elements,
            style,
        } = &err;
        assert_eq!(combinator, "<");
        assert_eq!(elements, &vec!["div".to_string()]);
        assert!(style.contains("margin"));
        assert!(err.to_string().contains("`<`"));
    }

    #[test]
    fn test_unit_prefix_uses_own_vendors() {
        let unit = StyleUnit::new().add("transition", "all").prefixed(["webkit"]);
        assert_eq!(
            render_class("a", &unit, &compact()).unwrap(),
            ".a{-webkit-transition:all;transition:all}"
        );
    }

    #[test]
    fn test_unit_prefix_falls_back_to_configured_vendors() {
        let unit = StyleUnit::new()
            .add("transition", "all")
            .prefixed(Vec::<String>::new());
        let options = RenderOptions {
            vendors: vec!["moz".into()],
            ..RenderOptions::default()
        };
        assert_eq!(
            render_class("a", &unit, &options).unwrap(),
            ".a{-moz-transition:all;transition:all}"
        );
    }

    #[test]
    fn test_auto_prefix() {
        let unit = StyleUnit::new().add("user-select", "none");
        let options = RenderOptions {
            vendors: vec!["webkit".into(), "ms".into()],
            auto_prefix: true,
            pretty_print: false,
        };
        assert_eq!(
            render_class("a", &unit, &options).unwrap(),
            ".a{-webkit-user-select:none;-ms-user-select:none;user-select:none}"
        );

        let without = RenderOptions {
            auto_prefix: false,
            ..options
        };
        assert_eq!(
            render_class("a", &unit, &without).unwrap(),
            ".a{user-select:none}"
        );
    }

    #[test]
    fn test_nested_units_inherit_prefix() {
        let unit = StyleUnit::new().prefixed(["webkit"]).media(
            MediaQuery::new().media_type("screen"),
            StyleUnit::new().add("appearance", "none"),
        );
        assert_eq!(
            render_class("a", &unit, &compact()).unwrap(),
            "@media screen{.a{-webkit-appearance:none;appearance:none}}"
        );
    }

    #[test]
    fn test_global_rules() {
        let rules = vec![
            Rule::new("html, body", StyleUnit::new().add("margin", 0)),
            Rule::new("*", StyleUnit::new().add("box-sizing", "border-box")),
        ];
        let css = CssTextRenderer
            .render(&StyleTree::Rules(&rules), &compact())
            .unwrap();
        assert_eq!(css, "html, body{margin:0}*{box-sizing:border-box}");
    }

    #[test]
    fn test_keyframes() {
        let frames = vec![
            Rule::new("from", StyleUnit::new().add("opacity", 0)),
            Rule::new("to", StyleUnit::new().add("opacity", 1)),
        ];
        let tree = StyleTree::Keyframes {
            name: "fade-in",
            frames: &frames,
        };
        assert_eq!(
            CssTextRenderer.render(&tree, &compact()).unwrap(),
            "@keyframes fade-in{from{opacity:0}to{opacity:1}}"
        );
        assert_eq!(
            CssTextRenderer.render(&tree, &pretty()).unwrap(),
            "@keyframes fade-in {\n  from {\n    opacity: 0;\n  }\n  to {\n    opacity: 1;\n  }\n}"
        );
    }

    #[test]
    fn test_pretty_multiple_blocks_are_newline_separated() {
        let unit = StyleUnit::new()
            .add("color", "red")
            .pseudo("hover", [("color", "blue")]);
        assert_eq!(
            render_class("a", &unit, &pretty()).unwrap(),
            ".a {\n  color: red;\n}\n.a:hover {\n  color: blue;\n}"
        );
    }
}
