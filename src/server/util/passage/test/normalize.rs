use super::*;

/// Tests normalizing a chapter reference for an aliased book.
///
/// Expected: `NAH.1` becomes `Nahum 1`
#[test]
fn replaces_aliased_book_code() {
    assert_eq!(normalize("NAH.1"), "Nahum 1");
}

/// Tests that the older `NAM` code resolves to the same book as `NAH`.
///
/// Expected: `NAM.3` becomes `Nahum 3`
#[test]
fn resolves_alternate_nahum_code() {
    assert_eq!(normalize("NAM.3"), "Nahum 3");
}

/// Tests that verse-level references are space-joined without special casing.
///
/// Expected: every dot becomes a space
#[test]
fn joins_all_segments_with_spaces() {
    assert_eq!(normalize("RUT.4.13"), "Ruth 4 13");
    assert_eq!(normalize("JHN.3.16"), "John 3 16");
    assert_eq!(normalize("PHP.4.13"), "Philippians 4 13");
}

/// Tests that the book lookup ignores case.
///
/// Expected: lowercase `nah` is still recognised
#[test]
fn looks_up_book_case_insensitively() {
    assert_eq!(normalize("nah.1"), "Nahum 1");
    assert_eq!(normalize("1co.13"), "1 Corinthians 13");
}

/// Tests that an unknown book code is passed through with its original casing.
///
/// Expected: only the separators change
#[test]
fn passes_unknown_book_through_verbatim() {
    assert_eq!(normalize("xyz.1"), "xyz 1");
    assert_eq!(normalize("Foo.2.Bar"), "Foo 2 Bar");
}

/// Tests degenerate input that has no dots or no content at all.
///
/// Expected: no panic, single segment returned as-is or aliased
#[test]
fn handles_single_segment_and_empty_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("REV"), "Revelation");
    assert_eq!(normalize("anything"), "anything");
}

/// Tests that empty segments from repeated dots are kept as empty words.
///
/// Expected: `JHN..3` keeps both separators
#[test]
fn preserves_empty_segments() {
    assert_eq!(normalize("JHN..3"), "John  3");
    assert_eq!(normalize("JHN.3."), "John 3 ");
}

/// Tests the alias table directly.
///
/// Expected: minimum entries present, lowercase keys rejected
#[test]
fn alias_table_contains_required_entries() {
    assert_eq!(book_alias("RUT"), Some("Ruth"));
    assert_eq!(book_alias("NAH"), Some("Nahum"));
    assert_eq!(book_alias("NAM"), Some("Nahum"));
    assert_eq!(book_alias("rut"), None);
    assert_eq!(book_alias("XYZ"), None);
}

/// Tests that spaces are not segment separators.
///
/// A space-separated reference is a single segment, so the book lookup misses and the
/// reference passes through unchanged.
///
/// Expected: `RUT 1` stays `RUT 1`
#[test]
fn leaves_space_separated_reference_unchanged() {
    assert_eq!(normalize("RUT 1"), "RUT 1");
}
