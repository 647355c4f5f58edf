// Event page fixtures shaped like the real HYROX event pages

pub const ANAHEIM_URL: &str = "https://hyrox.com/event/hyrox-anaheim/";
pub const CHICAGO_URL: &str = "https://hyrox.com/event/hyrox-chicago/";
pub const DALLAS_URL: &str = "https://hyrox.com/event/hyrox-dallas/";

pub fn event_page(name: &str, cta: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><title>HYROX {name}</title></head>
<body>
  <header><nav><a href="/">HYROX</a></nav></header>
  <main>
    <h1>HYROX {name}</h1>
    <div class="event-cta">{cta}</div>
  </main>
  <footer>HYROX World Series</footer>
</body>
</html>"#
    )
}

pub fn on_sale_page(name: &str) -> String {
    event_page(name, r#"<a class="button" href="/tickets">Buy Tickets here</a>"#)
}

pub fn coming_soon_page(name: &str) -> String {
    event_page(name, "<span>Ticket sales start soon!</span>")
}

pub fn bare_page(name: &str) -> String {
    event_page(name, "<p>More information coming soon.</p>")
}

pub fn both_markers_page(name: &str) -> String {
    event_page(
        name,
        r#"<span>Ticket sales start soon!</span><a href="/tickets">Buy Tickets here</a>"#,
    )
}
