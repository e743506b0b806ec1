//! Use case port

/// An application-layer operation orchestrating one business action.
#[trait_variant::make(UseCase: Send)]
pub trait LocalUseCase<I> {
    type Output;
    type Error;

    async fn execute(&self, input: I) -> Result<Self::Output, Self::Error>;
}
