use sheet_editor::{
    EditorHost, HostError, SessionConfig, StyleTheme, SurfaceId,
};
use sheet_editor_lang::StyleCategory;

#[test]
fn test_remount_on_same_surface_does_not_leak_buffers() {
    let mut host = EditorHost::new();
    let surface = SurfaceId::new(7);

    let first = host.mount(surface, "int a = 1;", SessionConfig::default());
    assert_eq!(host.live_session_count(), 1);

    host.unmount(first);
    assert_eq!(host.live_session_count(), 0);

    let second = host.mount(surface, "int b = 2;", SessionConfig::default());
    assert_eq!(host.live_session_count(), 1);
    assert_eq!(host.current_content(second).unwrap(), "int b = 2;");
}

#[test]
fn test_unmount_is_idempotent() {
    let mut host = EditorHost::new();
    let handle = host.mount(SurfaceId::new(1), "x", SessionConfig::default());

    host.unmount(handle);
    host.unmount(handle);
    host.unmount(handle);
    assert_eq!(host.live_session_count(), 0);
}

#[test]
fn test_stale_handle_cannot_kill_newer_session() {
    let mut host = EditorHost::new();
    let surface = SurfaceId::new(3);

    let first = host.mount(surface, "first", SessionConfig::default());
    host.unmount(first);
    let second = host.mount(surface, "second", SessionConfig::default());

    // Mount-effect churn: a late unmount with the old handle must not tear
    // down the session mounted after it.
    host.unmount(first);
    assert_eq!(host.live_session_count(), 1);
    assert!(host.is_mounted(second));
    assert!(!host.is_mounted(first));
    assert_eq!(host.current_content(second).unwrap(), "second");
}

#[test]
#[should_panic(expected = "already has a live editor session")]
fn test_double_mount_is_a_programming_error() {
    let mut host = EditorHost::new();
    let surface = SurfaceId::new(9);
    let _first = host.mount(surface, "a", SessionConfig::default());
    let _second = host.mount(surface, "b", SessionConfig::default());
}

#[test]
fn test_handle_operations_fail_after_unmount() {
    let mut host = EditorHost::new();
    let handle = host.mount(SurfaceId::new(4), "text", SessionConfig::default());
    host.unmount(handle);

    assert!(matches!(
        host.current_content(handle),
        Err(HostError::StaleHandle(_))
    ));
    assert!(matches!(
        host.replace_content(handle, "other"),
        Err(HostError::StaleHandle(_))
    ));
    assert!(matches!(
        host.restyle(handle, StyleTheme::new()),
        Err(HostError::StaleHandle(_))
    ));
}

#[test]
fn test_replace_content_is_a_full_replace() {
    let mut host = EditorHost::new();
    let handle = host.mount(SurfaceId::new(5), "old content", SessionConfig::default());

    host.replace_content(handle, "entirely new").unwrap();
    assert_eq!(host.current_content(handle).unwrap(), "entirely new");
}

#[test]
fn test_restyle_preserves_session_state() {
    let mut host = EditorHost::new();
    let handle = host.mount(
        SurfaceId::new(6),
        "class A {\n  int x;\n}\n",
        SessionConfig::default(),
    );

    {
        let session = host.session_mut(handle).unwrap();
        session.set_cursor(12);
        session.set_scroll_top(1);
    }

    let theme = StyleTheme::new()
        .with(StyleCategory::Keyword, 1)
        .with(StyleCategory::TypeName, 2);
    host.restyle(handle, theme).unwrap();

    let session = host.session(handle).unwrap();
    assert_eq!(session.text(), "class A {\n  int x;\n}\n");
    assert_eq!(session.cursor(), 12);
    assert_eq!(session.scroll_top(), 1);
    assert_eq!(
        session.theme().style_for(StyleCategory::TypeName),
        Some(2)
    );
}

#[test]
fn test_crlf_content_is_normalized_and_export_restores_it() {
    let mut host = EditorHost::new();
    let handle = host.mount(SurfaceId::new(8), "a\r\nb\r\n", SessionConfig::default());

    let session = host.session(handle).unwrap();
    assert_eq!(session.text(), "a\nb\n");
    assert_eq!(session.text_for_export(), "a\r\nb\r\n");
}
