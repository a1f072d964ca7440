/// Returns the ESV display name for a USFM book code.
///
/// `code` must already be uppercase. Both `NAH` and the older `NAM` map to Nahum.
pub fn book_alias(code: &str) -> Option<&'static str> {
    let name = match code {
        "GEN" => "Genesis",
        "EXO" => "Exodus",
        "LEV" => "Leviticus",
        "NUM" => "Numbers",
        "DEU" => "Deuteronomy",
        "JOS" => "Joshua",
        "JDG" => "Judges",
        "RUT" => "Ruth",
        "1SA" => "1 Samuel",
        "2SA" => "2 Samuel",
        "1KI" => "1 Kings",
        "2KI" => "2 Kings",
        "1CH" => "1 Chronicles",
        "2CH" => "2 Chronicles",
        "EZR" => "Ezra",
        "NEH" => "Nehemiah",
        "EST" => "Esther",
        "JOB" => "Job",
        "PSA" => "Psalms",
        "PRO" => "Proverbs",
        "ECC" => "Ecclesiastes",
        "SNG" => "Song of Solomon",
        "ISA" => "Isaiah",
        "JER" => "Jeremiah",
        "LAM" => "Lamentations",
        "EZK" => "Ezekiel",
        "DAN" => "Daniel",
        "HOS" => "Hosea",
        "JOL" => "Joel",
        "AMO" => "Amos",
        "OBA" => "Obadiah",
        "JON" => "Jonah",
        "MIC" => "Micah",
        "NAH" | "NAM" => "Nahum",
        "HAB" => "Habakkuk",
        "ZEP" => "Zephaniah",
        "HAG" => "Haggai",
        "ZEC" => "Zechariah",
        "MAL" => "Malachi",
        "MAT" => "Matthew",
        "MRK" => "Mark",
        "LUK" => "Luke",
        "JHN" => "John",
        "ACT" => "Acts",
        "ROM" => "Romans",
        "1CO" => "1 Corinthians",
        "2CO" => "2 Corinthians",
        "GAL" => "Galatians",
        "EPH" => "Ephesians",
        "PHP" => "Philippians",
        "COL" => "Colossians",
        "1TH" => "1 Thessalonians",
        "2TH" => "2 Thessalonians",
        "1TI" => "1 Timothy",
        "2TI" => "2 Timothy",
        "TIT" => "Titus",
        "PHM" => "Philemon",
        "HEB" => "Hebrews",
        "JAS" => "James",
        "1PE" => "1 Peter",
        "2PE" => "2 Peter",
        "1JN" => "1 John",
        "2JN" => "2 John",
        "3JN" => "3 John",
        "JUD" => "Jude",
        "REV" => "Revelation",
        _ => return None,
    };

    Some(name)
}

/// Converts a dotted reference into the form the ESV text API expects.
///
/// The first segment is looked up case-insensitively in the book alias table and replaced
/// by its display name when found; otherwise it is kept exactly as written. Segments are
/// then joined with single spaces, so `PHP.4.13` becomes `Philippians 4 13`.
///
/// # Arguments
/// - `reference` - Dotted reference such as `NAH.1` or `JHN.3.16`
///
/// # Returns
/// - Space-separated reference, e.g. `Nahum 1`
pub fn normalize(reference: &str) -> String {
    let mut segments = reference.split('.');

    // `split` always yields at least one item, even for an empty string.
    let book = segments.next().unwrap_or_default();
    let book = book_alias(&book.to_uppercase()).unwrap_or(book);

    std::iter::once(book)
        .chain(segments)
        .collect::<Vec<_>>()
        .join(" ")
}
