// studio-backend/src/bin/generate_sitemap.rs

//! Offline sitemap generator, the build-time counterpart of the
//! `/sitemap.xml` route. Writes to the given path, or `sitemap.xml` in the
//! working directory by default.

use std::env;
use std::fs;

use studio_backend::service::sitemap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let base_url = env::var("PUBLIC_BASE_URL")
        .unwrap_or_else(|_| "https://softacademy.com.pl".to_string());
    let output = env::args()
        .nth(1)
        .unwrap_or_else(|| "sitemap.xml".to_string());

    let xml = sitemap::render(&base_url);
    fs::write(&output, xml)?;

    println!("Sitemap was generated: {output}");
    Ok(())
}
