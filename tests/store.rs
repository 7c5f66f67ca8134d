use book_catalog::{Book, BookStore};

async fn store() -> BookStore {
    let store = BookStore::in_memory().await.unwrap();
    store.ensure_schema().await.unwrap();
    store
}

fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(|b| b.title.as_str()).collect()
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let store = store().await;
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_orders_by_title_ignoring_ascii_case() {
    let store = store().await;
    for title in ["Zeta", "Alpha", "mid"] {
        store.insert(Some(title), Some("someone"), None).await.unwrap();
    }
    let books = store.list_all().await.unwrap();
    assert_eq!(titles(&books), vec!["Alpha", "mid", "Zeta"]);
}

#[tokio::test]
async fn insert_then_get_returns_same_fields() {
    let store = store().await;
    let id = store
        .insert(Some("Dune"), Some("Frank Herbert"), Some("spice"))
        .await
        .unwrap();
    let book = store.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(
        book,
        Book {
            id,
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            comments: Some("spice".into()),
        }
    );

    let id = store.insert(Some("Emma"), Some("Austen"), None).await.unwrap();
    assert_eq!(store.get_by_id(id).await.unwrap().unwrap().comments, None);
}

#[tokio::test]
async fn ids_are_unique() {
    let store = store().await;
    let a = store.insert(Some("A"), Some("x"), None).await.unwrap();
    let b = store.insert(Some("A"), Some("x"), None).await.unwrap();
    assert_ne!(a, b);
    assert_eq!(store.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn get_missing_is_none() {
    let store = store().await;
    assert!(store.get_by_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn update_overwrites_all_fields_and_is_idempotent() {
    let store = store().await;
    let id = store.insert(Some("Old"), Some("Someone"), Some("note")).await.unwrap();

    assert_eq!(store.update(id, Some("New"), Some("Other"), None).await.unwrap(), 1);
    let once = store.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(once.title, "New");
    assert_eq!(once.author, "Other");
    assert_eq!(once.comments, None);

    store.update(id, Some("New"), Some("Other"), None).await.unwrap();
    let twice = store.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(once, twice);
}

#[tokio::test]
async fn update_to_null_title_is_rejected() {
    let store = store().await;
    let id = store.insert(Some("Kept"), Some("Author"), None).await.unwrap();
    assert!(store.update(id, None, Some("Author"), None).await.is_err());
    assert_eq!(store.get_by_id(id).await.unwrap().unwrap().title, "Kept");
}

#[tokio::test]
async fn delete_then_get_is_absent() {
    let store = store().await;
    let keep = store.insert(Some("Keep"), Some("a"), None).await.unwrap();
    let gone = store.insert(Some("Gone"), Some("b"), None).await.unwrap();

    assert_eq!(store.delete_by_id(gone).await.unwrap(), 1);
    assert!(store.get_by_id(gone).await.unwrap().is_none());
    let ids: Vec<i64> = store.list_all().await.unwrap().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![keep]);
}

#[tokio::test]
async fn missing_id_update_and_delete_are_noops() {
    let store = store().await;
    store.insert(Some("One"), Some("a"), None).await.unwrap();
    store.insert(Some("Two"), Some("b"), None).await.unwrap();
    let before = store.list_all().await.unwrap();

    assert_eq!(store.delete_by_id(99).await.unwrap(), 0);
    assert_eq!(store.update(99, Some("X"), Some("Y"), None).await.unwrap(), 0);

    assert_eq!(store.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn injected_sql_is_stored_verbatim() {
    let store = store().await;
    let title = "'; DROP TABLE Books; --";
    let id = store.insert(Some(title), Some("Bobby"), Some("\" OR 1=1 --")).await.unwrap();

    let book = store.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(book.title, title);
    assert_eq!(book.comments.as_deref(), Some("\" OR 1=1 --"));
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn korean_catalog_scenario() {
    let store = store().await;
    let japan = store.insert(Some("일본"), Some("dongmin"), Some("곰방와")).await.unwrap();
    let china = store.insert(Some("중국"), Some("sunghyun"), Some("니하오")).await.unwrap();
    let korea = store.insert(Some("한국"), Some("jinoh"), Some("김치")).await.unwrap();

    let books = store.list_all().await.unwrap();
    assert_eq!(titles(&books), vec!["일본", "중국", "한국"]);

    let book = store.get_by_id(china).await.unwrap().unwrap();
    assert_eq!(
        (book.title.as_str(), book.author.as_str(), book.comments.as_deref()),
        ("중국", "sunghyun", Some("니하오"))
    );

    store.delete_by_id(china).await.unwrap();
    let ids: Vec<i64> = store.list_all().await.unwrap().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![japan, korea]);
}
