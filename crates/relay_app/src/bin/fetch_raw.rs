//! Interactive fetch script, unfiltered variant: prompt for a URL, dump the
//! whole response body, then scan it for the first `"name"` and `"image"`
//! values.

use std::io::{self, Write};

use relay_engine::{decode_text, fetch_blocking, scan_name_and_image, FetchSettings};

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

    let text = match decode_text(&output.bytes, output.metadata.content_type.as_deref()) {
        Ok(decoded) => decoded.text,
        Err(_) => String::from_utf8_lossy(&output.bytes).into_owned(),
    };

    println!("\n--- Full Response ---\n");
    println!("{text}");

    let fields = scan_name_and_image(&text);
    println!(
        "Extracted name: {}",
        fields.name.as_deref().unwrap_or("(not found)")
    );
    println!(
        "Extracted image: {}",
        fields.image.as_deref().unwrap_or("(not found)")
    );
}
