use recipe_ingest::{ImportConfig, ImportError, RecipeScraper};

fn scraper() -> RecipeScraper {
    RecipeScraper::new(&ImportConfig::default()).unwrap()
}

async fn serve(server: &mut mockito::ServerGuard, path: &str, html: &str) -> mockito::Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

#[tokio::test]
async fn test_wordpress_style_recipe() {
    let mut server = mockito::Server::new_async().await;
    let html = r#"
        <html>
        <head><title>Garlic Butter Shrimp - Example Kitchen</title></head>
        <body>
            <nav><ul><li>Home</li><li>Recipes</li><li>About</li></ul></nav>
            <article>
                <h1 class="entry-title">Garlic Butter Shrimp</h1>
                <div class="wprm-recipe-ingredients-container">
                    <ul class="wprm-recipe-ingredients">
                        <li class="wprm-recipe-ingredient">1 lb shrimp</li>
                        <li class="wprm-recipe-ingredient">4 tablespoons butter</li>
                        <li class="wprm-recipe-ingredient">5 cloves garlic</li>
                    </ul>
                </div>
            </article>
        </body>
        </html>
    "#;
    let _m = serve(&mut server, "/shrimp", html).await;

    let result = scraper()
        .scrape(&format!("{}/shrimp", server.url()))
        .await
        .unwrap();

    assert_eq!(
        result.as_str(),
        "Recipe Name: Garlic Butter Shrimp\n\nIngredients:\n1 lb shrimp\n4 tablespoons butter\n5 cloves garlic"
    );
}

#[tokio::test]
async fn test_list_fallback_keeps_document_order() {
    let mut server = mockito::Server::new_async().await;
    let html = r#"
        <html><head><title>Grandma's Cookies</title></head>
        <body>
            <ul><li>Home</li><li>Blog</li></ul>
            <ul><li>Share</li></ul>
            <ol>
                <li>225 g butter</li>
                <li>200 g sugar</li>
                <li>2 eggs</li>
                <li>1 tsp vanilla extract</li>
                <li>350 g flour</li>
                <li>1 tsp baking soda</li>
                <li>300 g chocolate chips</li>
            </ol>
            <ul><li>Privacy</li><li>Terms</li></ul>
            <ul><li>Instagram</li></ul>
        </body></html>
    "#;
    let _m = serve(&mut server, "/cookies", html).await;

    let result = scraper()
        .scrape(&format!("{}/cookies", server.url()))
        .await
        .unwrap();

    let ingredients = result.as_str().split("Ingredients:\n").nth(1).unwrap();
    assert_eq!(
        ingredients,
        [
            "225 g butter",
            "200 g sugar",
            "2 eggs",
            "1 tsp vanilla extract",
            "350 g flour",
            "1 tsp baking soda",
            "300 g chocolate chips",
        ]
        .join("\n")
    );
    assert!(result.as_str().starts_with("Recipe Name: Grandma's Cookies\n\n"));
}

#[tokio::test]
async fn test_ingredients_without_any_name() {
    let mut server = mockito::Server::new_async().await;
    let html = r#"
        <html><head><title></title></head>
        <body>
            <h2>Shopping</h2>
            <div class="ingredients">
                <ul><li>1 l milk</li><li>6 eggs</li></ul>
            </div>
        </body></html>
    "#;
    let _m = serve(&mut server, "/untitled", html).await;

    let result = scraper()
        .scrape(&format!("{}/untitled", server.url()))
        .await
        .unwrap();

    assert_eq!(result.as_str(), "Ingredients:\n1 l milk\n6 eggs");
}

#[tokio::test]
async fn test_content_sample_fallback() {
    let mut server = mockito::Server::new_async().await;
    let html = r#"
        <html><head><title>A Story About Bread</title></head>
        <body>
            <main>
                <p>Mix the flour and water.</p>
                <p>Let it rest overnight.</p>
            </main>
        </body></html>
    "#;
    let _m = serve(&mut server, "/bread", html).await;

    let result = scraper()
        .scrape(&format!("{}/bread", server.url()))
        .await
        .unwrap();

    assert_eq!(
        result.as_str(),
        "Recipe Name: A Story About Bread\n\nRecipe Content:\nMix the flour and water. Let it rest overnight."
    );
}

#[tokio::test]
async fn test_nothing_found() {
    let mut server = mockito::Server::new_async().await;
    let _m = serve(&mut server, "/empty", "<html><head></head><body><p>Nothing here</p></body></html>").await;

    let result = scraper().scrape(&format!("{}/empty", server.url())).await;
    assert!(matches!(result, Err(ImportError::NoRecipeDataFound)));
}

#[tokio::test]
async fn test_error_status_is_fetch_failure() {
    let mut server = mockito::Server::new_async().await;
    // A body that would scrape fine must still not be used
    let _m = server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body(r#"<h1>Not Found</h1><ul class="ingredients"><li>salt</li></ul>"#)
        .create_async()
        .await;

    let result = scraper().scrape(&format!("{}/missing", server.url())).await;
    assert!(matches!(result, Err(ImportError::FetchFailed(_))));
}

#[tokio::test]
async fn test_malformed_url_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    for url in ["recipe", "www.example.com/soup", "//example.com/soup", "file:///etc/hosts"] {
        let result = scraper().scrape(url).await;
        assert!(
            matches!(result, Err(ImportError::InvalidUrl(_))),
            "expected InvalidUrl for {url:?}"
        );
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_scraping_twice_is_identical() {
    let mut server = mockito::Server::new_async().await;
    let html = r#"
        <html><head><title>Tomato Salad</title></head>
        <body>
            <h1 class="recipe-title">Tomato Salad</h1>
            <ul itemprop="recipeIngredient"><li>4 tomatoes</li><li>1 tbsp olive oil</li></ul>
            <span itemprop="recipeIngredient">salt</span>
        </body></html>
    "#;
    let mock = server
        .mock("GET", "/salad")
        .with_status(200)
        .with_body(html)
        .expect(2)
        .create_async()
        .await;

    let url = format!("{}/salad", server.url());
    let first = scraper().scrape(&url).await.unwrap();
    let second = scraper().scrape(&url).await.unwrap();

    assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
    mock.assert_async().await;
}
