//! Contact page handler

use axum::response::{Html, IntoResponse};
use lumina_common::ContactSubject;

/// GET /contact
///
/// Contact form with the five fixed subject options and simulated delivery.
pub async fn contact_page() -> impl IntoResponse {
    let subject_options: String = ContactSubject::ALL
        .iter()
        .map(|subject| {
            format!(
                r#"<option value="{value}">{value}</option>"#,
                value = subject.as_str()
            )
        })
        .collect();

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Get in Touch - Lumina</title>
    <link rel="stylesheet" href="/static/portfolio.css">
</head>
<body>
    <header>
        <div class="header-content">
            <div class="header-left">
                <h1>Lumina</h1>
                <nav>
                    <a href="/">Gallery</a>
                    <a href="/contact" class="active">Contact</a>
                </nav>
            </div>
        </div>
    </header>

    <main class="container narrow">
        <section class="intro">
            <h2>Get in Touch</h2>
            <p>Interested in booking a session or purchasing a print?
               Fill out the form below.</p>
        </section>

        <div id="contact-success" class="panel hidden">
            <h3>Message Sent!</h3>
            <p>Thank you for reaching out. I'll get back to you shortly via email.</p>
            <button id="contact-again" class="btn btn-ghost">Send Another</button>
        </div>

        <form id="contact-form" class="panel contact-form">
            <div class="form-row">
                <div>
                    <label for="contact-name">Name</label>
                    <input type="text" id="contact-name" name="name" required placeholder="Jane Doe">
                </div>
                <div>
                    <label for="contact-email">Email</label>
                    <input type="email" id="contact-email" name="email" required placeholder="jane@example.com">
                </div>
            </div>

            <label for="contact-subject">Subject</label>
            <select id="contact-subject" name="subject" required>
                <option value="" disabled selected>Select a topic</option>
                {subject_options}
            </select>

            <label for="contact-message">Message</label>
            <textarea id="contact-message" name="message" rows="5" required
                      placeholder="Tell me about your project or idea..."></textarea>

            <div id="contact-error" class="banner banner-error hidden">
                Something went wrong. Please try again later.
            </div>

            <button type="submit" id="contact-submit" class="btn btn-primary">Send Message</button>
        </form>
    </main>

    <footer>
        <p>&copy; <span id="footer-year"></span> Lumina Photography Portfolio.</p>
    </footer>

    <script src="/static/contact.js"></script>
</body>
</html>
"#
    );

    Html(html)
}
