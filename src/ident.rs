//! Qualified identifier helpers.
//!
//! Identifiers are paths whose segments are joined by `.` (class member),
//! `#` (instance member) or `@` (event). While the tree is being built every
//! id also carries its section as the first `.`-separated segment, so
//! `Ajax.Updater#update` documented in section `Utilities` is keyed as
//! `Utilities.Ajax.Updater#update`.

/// Characters that separate identifier segments.
pub const SEPARATORS: [char; 3] = ['.', '#', '@'];

/// Split an id into its segments: `"Sec.Foo#bar"` → `["Sec", "Foo", "bar"]`.
pub fn segments(id: &str) -> Vec<&str> {
    id.split(SEPARATORS).collect()
}

/// Qualify an id with its section: `"Utilities"` + `"Ajax"` → `"Utilities.Ajax"`.
/// Section-less ids keep a leading dot.
pub fn qualify(section: Option<&str>, id: &str) -> String {
    format!("{}.{}", section.unwrap_or(""), id)
}

/// Byte offset of the separator that divides an id from its parent.
///
/// Events attach at their `@` marker; everything else at the last `.` or
/// `#`, whichever comes later.
pub fn parent_boundary(id: &str) -> Option<usize> {
    match id.find('@') {
        Some(at) => Some(at),
        None => id.rfind('.').max(id.rfind('#')),
    }
}

/// The id of the record this one nests under, if it has a separator at all.
pub fn parent_key(id: &str) -> Option<&str> {
    parent_boundary(id).map(|i| &id[..i])
}

/// The local part of an id after its parent boundary.
pub fn local_name(id: &str) -> &str {
    match parent_boundary(id) {
        Some(i) => &id[i + 1..],
        None => id,
    }
}

/// Drop the leading section segment: `"Utilities.Ajax.Updater"` → `"Ajax.Updater"`.
pub fn strip_section(id: &str) -> &str {
    match id.find('.') {
        Some(i) => &id[i + 1..],
        None => id,
    }
}

/// Output path for an id: `#` becomes `.prototype.`, the first `@` becomes `.event.`.
pub fn output_path(id: &str) -> String {
    id.replace('#', ".prototype.").replacen('@', ".event.", 1)
}

/// Turn a class member id into its instance counterpart by converting the
/// final `.` into `#`: `"Element.hide"` → `"Element#hide"`.
pub fn instance_member(id: &str) -> Option<String> {
    let dot = id.rfind('.')?;
    Some(format!("{}#{}", &id[..dot], &id[dot + 1..]))
}

/// Display id of a constructor: `"Ajax.Request.new"` → `"new Ajax.Request"`.
pub fn constructor_id(id: &str) -> String {
    format!("new {}", id.strip_suffix(".new").unwrap_or(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_split_on_every_separator() {
        assert_eq!(segments("Sec.Foo#bar"), vec!["Sec", "Foo", "bar"]);
        assert_eq!(segments(".Foo@ready"), vec!["", "Foo", "ready"]);
        assert_eq!(segments("Sec"), vec!["Sec"]);
    }

    #[test]
    fn qualify_without_section_keeps_leading_dot() {
        assert_eq!(qualify(None, "Foo.bar"), ".Foo.bar");
        assert_eq!(qualify(Some("DOM"), "Element"), "DOM.Element");
    }

    #[test]
    fn boundary_prefers_event_marker() {
        assert_eq!(parent_key("Sec.Foo@ready"), Some("Sec.Foo"));
        assert_eq!(parent_key("Sec.Foo@dom.loaded"), Some("Sec.Foo"));
    }

    #[test]
    fn boundary_takes_last_dot_or_hash() {
        assert_eq!(parent_key("Sec.Foo#bar"), Some("Sec.Foo"));
        assert_eq!(parent_key("Sec.Foo.Bar#baz"), Some("Sec.Foo.Bar"));
        assert_eq!(parent_key("Sec.Foo#bar.baz"), Some("Sec.Foo#bar"));
        assert_eq!(parent_key(".Foo"), Some(""));
        assert_eq!(parent_key("Sec"), None);
    }

    #[test]
    fn local_names() {
        assert_eq!(local_name("Foo#bar"), "bar");
        assert_eq!(local_name("Foo@ready"), "ready");
        assert_eq!(local_name("Foo"), "Foo");
    }

    #[test]
    fn strip_section_drops_first_segment_only() {
        assert_eq!(strip_section("Utilities.Ajax.Updater"), "Ajax.Updater");
        assert_eq!(strip_section(".Foo#bar"), "Foo#bar");
        assert_eq!(strip_section("Utilities"), "Utilities");
    }

    #[test]
    fn paths_expand_prototype_and_event() {
        assert_eq!(output_path("Foo#bar"), "Foo.prototype.bar");
        assert_eq!(output_path("Foo@ready"), "Foo.event.ready");
        assert_eq!(output_path("Foo@a@b"), "Foo.event.a@b");
    }

    #[test]
    fn instance_member_rewrites_last_dot() {
        assert_eq!(instance_member("Element.Methods.hide").as_deref(), Some("Element.Methods#hide"));
        assert_eq!(instance_member("hide"), None);
    }

    #[test]
    fn constructor_display() {
        assert_eq!(constructor_id("Foo.new"), "new Foo");
        assert_eq!(constructor_id("Foo"), "new Foo");
    }
}
