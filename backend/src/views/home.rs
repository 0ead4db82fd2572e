use crates::domain::value_objects::services::ServiceModel;
use html_escape::encode_text;

pub const SITE_NAME: &str = "BrightFlow Digital";
pub const EMPTY_CATALOG_PLACEHOLDER: &str = "No services available at the moment";

/// Formats a price the way Italian readers expect: `,` for decimals, `.` as
/// thousands separator once the integer part reaches five digits, at most
/// three fraction digits.
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.3}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    if int_part.len() >= 5 {
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }
    } else {
        grouped.push_str(int_part);
    }

    let sign = if price < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac_part}")
    }
}

fn render_service_card(service: &ServiceModel) -> String {
    format!(
        r#"
        <article class="service-card" id="service-{id}">
          <span class="badge">{category}</span>
          <h3>{title}</h3>
          <p>{description}</p>
          <div class="price-row">
            <span class="price">&euro;{price}</span>
            <span class="price-note">starting from</span>
          </div>
        </article>"#,
        id = service.id,
        category = encode_text(&service.category),
        title = encode_text(&service.title),
        description = encode_text(&service.description),
        price = format_price(service.price),
    )
}

/// Renders the whole home page. An empty slice renders the placeholder
/// instead of an empty grid.
pub fn render_home(services: &[ServiceModel]) -> String {
    let cards = if services.is_empty() {
        format!(
            r#"
        <div class="empty">{EMPTY_CATALOG_PLACEHOLDER}</div>"#
        )
    } else {
        services.iter().map(render_service_card).collect::<String>()
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{SITE_NAME} | Digital Services for SMEs</title>
    <meta name="description" content="Digital consulting, web development and marketing automation for small and medium businesses.">
  </head>
  <body>
    <header>
      <h1>{SITE_NAME}</h1>
      <nav>
        <a href="#services">Services</a>
        <a href="/api/services">API</a>
      </nav>
    </header>

    <section class="hero">
      <h2>Digital Services <span>for Your Success</span></h2>
      <p>Tailored digital consulting and development for small and medium businesses.
        We turn your ideas into scalable, high-performance solutions.</p>
      <a class="button" href="#services">Discover the services</a>
      <a class="button secondary" href="/api/services">API demo</a>
    </section>

    <section id="services">
      <h2>Our Services</h2>
      <p>Complete solutions for your digital transformation</p>
      <div class="grid">{cards}
      </div>
    </section>

    <section class="stats">
      <div><strong>{count}+</strong> Active Services</div>
      <div><strong>99.9%</strong> Guaranteed Uptime</div>
      <div><strong>&lt;50ms</strong> Edge Latency</div>
    </section>

    <footer>
      <p>&copy; {SITE_NAME}</p>
    </footer>
  </body>
</html>
"##,
        count = services.len(),
    )
}
