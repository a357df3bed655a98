//! Optimistic updates of locally held lists.
//!
//! A status toggle changes the list the user is looking at right away and
//! only then asks the backend. If the request fails, the list is put back
//! exactly as it was.

use std::future::Future;

/// Applies `mutate` to `items`, awaits `request`, and restores the previous
/// contents when the request fails.
pub async fn apply<T, R, E, M, Fut>(items: &mut Vec<T>, mutate: M, request: Fut) -> Result<R, E>
where
    T: Clone,
    M: FnOnce(&mut Vec<T>),
    Fut: Future<Output = Result<R, E>>,
{
    let snapshot = items.clone();
    mutate(items);

    match request.await {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::debug!(items = snapshot.len(), "optimistic update rolled back");
            *items = snapshot;
            Err(e)
        }
    }
}

/// Mutation for [`apply`] that runs `update` on the item with `id`.
pub fn update_where<T, K, U>(id: i64, key: K, update: U) -> impl FnOnce(&mut Vec<T>)
where
    K: Fn(&T) -> i64,
    U: FnOnce(&mut T),
{
    move |items: &mut Vec<T>| {
        if let Some(item) = items.iter_mut().find(|item| key(item) == id) {
            update(item);
        }
    }
}
