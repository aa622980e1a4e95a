/// Generate client methods with oneshot channel boilerplate and automatic tracing.
///
/// A closed actor or a dropped reply channel becomes `ActorCommunicationError`.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $crate::error::UserError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| $crate::error::UserError::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| $crate::error::UserError::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}
