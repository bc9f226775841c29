use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Two-column listing; the key column is padded to its widest entry.
pub fn print_pairs(headers: [&str; 2], rows: &[(&str, String)]) {
    let width = rows
        .iter()
        .map(|(key, _)| key.len())
        .chain([headers[0].len()])
        .max()
        .unwrap_or(0);

    println!("{:width$}  {}", headers[0], headers[1]);
    println!("{}  {}", "-".repeat(width), "-".repeat(headers[1].len()));
    for (key, value) in rows {
        println!("{key:width$}  {value}");
    }
}
