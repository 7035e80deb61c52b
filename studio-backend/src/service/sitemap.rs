// studio-backend/src/service/sitemap.rs

use crate::domain::SiteRoute;

/// Renders the sitemap over the indexable routes. Shared by the
/// `/sitemap.xml` handler and the offline `generate-sitemap` binary.
pub fn render(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let urls = SiteRoute::indexable()
        .iter()
        .map(|route| {
            format!(
                "  <url>\n    <loc>{base}{}</loc>\n    <changefreq>weekly</changefreq>\n    <priority>{}</priority>\n  </url>",
                route.path(),
                route.sitemap_priority()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}\n</urlset>\n"
    )
}
