use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn test_contact_form_fields_exist() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");

    let page = browser
        .open(&server.url_for("/contact"))
        .expect("Failed to open contact page");

    for field in [
        "input[name='name'][required]",
        "input[name='phone'][required]",
        "input[name='email']",
        "textarea[name='message'][required]",
        "button[type='submit']",
    ] {
        assert!(page.has(field), "{field} should exist");
    }

    let href = page
        .attribute("a.btn.whatsapp", "href")
        .expect("WhatsApp link should exist")
        .unwrap_or_default();
    assert!(href.starts_with("https://wa.me/213560055803?text="));
}

#[tokio::test]
async fn test_arabic_contact_page_is_rtl() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");

    let page = browser
        .open(&server.url_for("/contact?lang=ar"))
        .expect("Failed to open contact page");

    assert_eq!(page.direction().unwrap().as_deref(), Some("rtl"));
    let label = page.text("label[for='name']").unwrap();
    assert_eq!(label.trim(), "الاسم الكامل");
}
