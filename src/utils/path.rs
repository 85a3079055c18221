use std::path::Path;

pub fn file_name<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string()
}

pub fn file_stem<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string()
}

pub fn ext_segments<P: AsRef<Path>>(path: P) -> Vec<String> {
    let name = file_name(path);
    let mut parts = name.split('.');
    // The first segment is the stem, not an extension.
    parts.next();

    parts.map(|s| s.to_string()).collect()
}

pub fn has_ext<P: AsRef<Path>>(path: P, ext: &str) -> bool {
    ext_segments(path).iter().any(|segment| segment == ext)
}
