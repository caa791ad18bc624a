use super::*;

// --- message_for ---

#[test]
fn message_defaults_to_world() {
    assert_eq!(message_for(&GreetingParams { name: None }), "Hello World!");
}

#[test]
fn message_uses_query_name() {
    assert_eq!(message_for(&GreetingParams { name: Some("Ada".into()) }), "Hello Ada!");
}

// --- greeting_svg ---

#[test]
fn greeting_svg_is_wellformed() {
    let svg = greeting_svg("Hello World!");
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("Hello World!"));
}

#[test]
fn greeting_svg_escapes_markup_in_name() {
    let svg = greeting_svg("Hello <b>!");
    assert!(!svg.contains("<b>"));
    assert!(svg.contains("&lt;b&gt;"));
}

// --- banner_svg ---

#[test]
fn banner_svg_repeats_the_message() {
    let svg = banner_svg("Hello Ada!");
    assert_eq!(svg.matches("Hello Ada!").count(), 25);
}

#[test]
fn banner_svg_has_gradient_and_rotation() {
    let svg = banner_svg("Hello World!");
    assert!(svg.contains("linearGradient"));
    assert!(svg.contains("rotate(-15 500 300)"));
}

#[test]
fn banner_scale_shrinks_long_messages() {
    let short = banner_scale("Hi!");
    let long = banner_scale("Hello Maximiliano!");
    assert!(short > long);
    assert!((banner_scale("123456789") - 1.0).abs() < f64::EPSILON);
}

#[test]
fn banner_scale_handles_empty_message() {
    assert!(banner_scale("").is_finite());
}

#[test]
fn banner_svg_embeds_computed_scale() {
    // 9-char message scales by exactly 1.
    let svg = banner_svg("123456789");
    assert!(svg.contains("scale(1)"));
}
