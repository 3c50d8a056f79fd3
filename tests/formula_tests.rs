// Host-side tests for formula markup.

use physics_lab::core::formula::{escape_html, format_formula};

#[test]
fn empty_formula_renders_empty() {
    assert_eq!(format_formula(""), "");
}

#[test]
fn times_and_escaping() {
    assert_eq!(format_formula(r"F = m \times a"), "F = m &times; a");
    assert_eq!(format_formula("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    assert_eq!(escape_html("<&>"), "&lt;&amp;&gt;");
}

#[test]
fn fraction_with_superscript() {
    assert_eq!(
        format_formula(r"\frac{U}{R}"),
        "<span class=\"math-frac\"><span class=\"top\">U</span><span class=\"bottom\">R</span></span>"
    );
    let html = format_formula(r"F = k \times \frac{|q_{1} q_{2}|}{r^{2}}");
    assert!(html.contains("<span class=\"top\">|q<sub>1</sub> q<sub>2</sub>|</span>"));
    assert!(html.contains("<span class=\"bottom\">r<sup>2</sup></span>"));
    assert!(html.starts_with("F = k &times; "));
}

#[test]
fn nested_braces_inside_fraction() {
    let html = format_formula(r"\frac{v^{2}}{r}");
    assert!(html.contains("<span class=\"top\">v<sup>2</sup></span>"));
}

#[test]
fn malformed_fraction_is_kept_literally() {
    assert_eq!(format_formula(r"\frac{a"), r"\frac{a");
    assert_eq!(format_formula(r"\frac x"), r"\frac x");
}

#[test]
fn cdots_is_not_split_by_cdot() {
    assert_eq!(format_formula(r"R_{1} + \cdots"), "R<sub>1</sub> + ⋯");
    assert_eq!(format_formula(r"a \cdot b"), "a &middot; b");
}

#[test]
fn greek_and_trig_tokens() {
    assert_eq!(
        format_formula(r"\Delta L = \alpha L_{0} \Delta T"),
        "Δ L = α L<sub>0</sub> Δ T"
    );
    assert_eq!(format_formula(r"n_{1} \sin \theta"), "n<sub>1</sub> sin θ");
    assert_eq!(format_formula(r"\omega \propto \beta \pm 1"), "ω ∝ β ± 1");
}

#[test]
fn unknown_commands_survive() {
    assert_eq!(format_formula(r"\vec{F}"), r"\vec{F}");
    assert_eq!(format_formula(r"a \quad b"), r"a \quad b");
}

#[test]
fn unterminated_script_group_is_literal() {
    assert_eq!(format_formula("x^{2"), "x^{2");
    assert_eq!(format_formula("x_1"), "x_1");
}
