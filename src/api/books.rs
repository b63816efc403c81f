//! Book endpoints

use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    models::{Book, BookRequest},
    AppState,
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.books.list().await)
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created", body = Book,
            headers(("Location" = String, description = "URL of the new book"))),
        (status = 422, description = "Invalid book, body maps each field to its error messages")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(request): Json<BookRequest>,
) -> AppResult<impl IntoResponse> {
    let book = state.services.books.create(request).await?;
    let location = format!("/books/{}", book.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(book)))
}

/// Replace a book's title and author.
///
/// The record is selected by the `id` in the body. Unknown ids are ignored and
/// the submitted body is echoed back either way.
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = Book,
    responses(
        (status = 200, description = "Submitted book", body = Book)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(book): Json<Book>,
) -> Json<Book> {
    if book.id != id {
        tracing::warn!(
            path_id = id,
            body_id = book.id,
            "Path and body book ids differ, using body id"
        );
    }
    state.services.books.update(book.clone()).await;
    Json(book)
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted, or did not exist")
    )
)]
pub async fn delete_book(State(state): State<AppState>, Path(id): Path<i32>) -> Json<()> {
    state.services.books.delete(id).await;
    Json(())
}
