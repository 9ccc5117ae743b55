/// Builds a [`Listener`](crate::Listener) that forwards every notification to
/// `handler.method(id, data)`. The handler must be cheap to clone (usually an `Arc`).
#[macro_export]
macro_rules! listener {
    ($handler:ident.$method:ident) => {
        $crate::Listener::new({
            let handler = $handler.clone();
            move |id, value| {
                handler.$method(id, value);
            }
        })
    };
}
