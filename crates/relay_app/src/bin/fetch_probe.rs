//! Interactive fetch script: prompt for a URL, print status, headers and the
//! start of the body, then scan for the first `"name"` and `"image"` values.

use std::io::{self, Write};

use relay_engine::{decode_text, fetch_blocking, scan_name_and_image, FetchSettings};

const BODY_PREVIEW_CHARS: usize = 1000;

fn main() {
    print!("Enter a URL to fetch: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        eprintln!("Could not read input");
        return;
    }
    let url = line.trim();
    if url.is_empty() {
        eprintln!("No URL given");
        return;
    }

    let output = match fetch_blocking(FetchSettings::default(), url) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("Error fetching URL: {err}");
            return;
        }
    };

    println!("Status: {}", output.metadata.status);
    println!("Headers:");
    for (name, value) in &output.metadata.headers {
        println!("  {name}: {value}");
    }

    let text = match decode_text(&output.bytes, output.metadata.content_type.as_deref()) {
        Ok(decoded) => decoded.text,
        Err(_) => String::from_utf8_lossy(&output.bytes).into_owned(),
    };

    println!("\n--- Content (truncated to {BODY_PREVIEW_CHARS} chars) ---\n");
    println!("{}", text.chars().take(BODY_PREVIEW_CHARS).collect::<String>());

    let fields = scan_name_and_image(&text);
    if fields.is_empty() {
        println!("\n--- No name or image values found ---");
        return;
    }
    println!("\n--- Extracted Values ---");
    if let Some(name) = fields.name {
        println!("Name: {name}");
    }
    if let Some(image) = fields.image {
        println!("Image: {image}");
    }
}
