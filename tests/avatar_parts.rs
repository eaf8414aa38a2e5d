use avatar_kit::avatar::derive_parts;
use avatar_kit::{AvatarSpec, DefaultContent, Shape, Size};

/// Helper to build a spec with dynamic color on
fn dynamic(label: &str) -> AvatarSpec {
    AvatarSpec {
        dynamic_color: true,
        ..AvatarSpec::with_label(label)
    }
}

#[test]
fn label_avatar_with_dynamic_color() {
    let mut spec = dynamic("PrimeFaces Rocks");
    spec.style = Some("width:3rem".into());
    spec.title = Some("PrimeFaces".into());

    let parts = derive_parts(&spec).unwrap();
    assert_eq!(parts.initials.as_deref(), Some("PR"));
    assert_eq!(
        parts.color_css.as_deref(),
        Some("background-color:hsla(117,100%,40%,100%)")
    );
    assert_eq!(
        parts.style.as_deref(),
        Some("background-color:hsla(117,100%,40%,100%);width:3rem")
    );
    assert_eq!(parts.title.as_deref(), Some("PrimeFaces"));
    assert_eq!(parts.content, DefaultContent::Text("PR".into()));
    assert_eq!(parts.image_url, None);
    assert_eq!(
        parts.style_class,
        "ui-avatar ui-avatar-dynamic ui-avatar-dynamic-dark"
    );
}

#[test]
fn color_uses_full_label_not_initials() {
    let a = derive_parts(&dynamic("Ada Lovelace")).unwrap();
    let b = derive_parts(&dynamic("Alan Lloyd")).unwrap();
    // same initials
    assert_eq!(a.initials, b.initials);
    assert_eq!(
        a.color_css.unwrap(),
        avatar_kit::color::derive_background_color("Ada Lovelace", 100, 40, 100)
    );
}

#[test]
fn icon_avatar_without_label() {
    let spec = AvatarSpec {
        icon: Some("pi pi-user".into()),
        shape: Shape::Circle,
        size: Size::Large,
        dynamic_color: true,
        ..AvatarSpec::default()
    };
    let parts = derive_parts(&spec).unwrap();
    assert_eq!(parts.initials, None);
    assert_eq!(parts.color_css, None);
    assert_eq!(parts.style, None);
    assert_eq!(
        parts.content,
        DefaultContent::Icon("ui-avatar-icon pi pi-user".into())
    );
    assert!(parts.style_class.contains("ui-avatar-circle ui-avatar-lg"));
}

#[test]
fn gravatar_config_wins_over_fallback() {
    let spec = AvatarSpec {
        gravatar: Some("Test@Example.com".into()),
        gravatar_config: Some("d=retro&s=64".into()),
        gravatar_fallback: Some(true),
        ..AvatarSpec::default()
    };
    let parts = derive_parts(&spec).unwrap();
    assert_eq!(
        parts.image_url.as_deref(),
        Some("https://www.gravatar.com/avatar/55502f40dc8b7c769880b10874abc9d0?d=retro&s=64")
    );
    assert_eq!(parts.content, DefaultContent::None);
}

#[test]
fn empty_title_is_dropped() {
    let spec = AvatarSpec {
        title: Some(String::new()),
        ..AvatarSpec::with_label("Al")
    };
    let parts = derive_parts(&spec).unwrap();
    assert_eq!(parts.title, None);
    assert_eq!(parts.initials.as_deref(), Some("Al"));
}
