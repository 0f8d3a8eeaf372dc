//! Landing page.

/// Static landing page served at `/`.
pub const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Hello Axum & Appwrite</title>
    <style>
      body { font-family: sans-serif; background: #f0f4f8; padding: 2rem; }
      h1 { color: #0078d7; }
      nav a {
        color: white; background-color: #0078d7;
        padding: 10px 20px; border-radius: 5px; font-weight: bold;
        text-decoration: none; transition: background-color 0.3s ease;
      }
      nav a:hover { background-color: #005fa3; }
      footer { margin-top: 40px; font-size: 0.9rem; color: #666; }
    </style>
  </head>
  <body>
    <h1>Hello, Axum & Appwrite!</h1>
    <nav><a href="/subscription">Go to subscription</a></nav>
    <footer>Powered by Axum & Appwrite</footer>
  </body>
</html>
"#;
