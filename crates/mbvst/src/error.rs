pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input graph cannot be spanned at all. Raised before any processing
    /// (precondition check) since no spanning tree exists.
    #[error("input graph is disconnected ({components} components); no spanning tree exists")]
    DisconnectedInput { components: usize },

    /// No edge in the instance universe joins an orphan component to the hub.
    /// Fatal from the standalone reconnection entry point: it means the
    /// instance itself is disconnected or the working data is corrupt.
    #[error("no instance edge reconnects the component containing `{vertex}` to the hub")]
    ReconnectImpossible { vertex: String },
}
