//! Serves a quote card from a local mock, fetches it through the default reqwest transport, and
//! shows that the second call is answered from the cache.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use quote_provider::{config::ProviderConfig, provider::ReqwestQuoteProvider, url::Url};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let card_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api");
			then.status(200).header("content-type", "image/svg+xml").body(
				"<svg><foreignObject><h3>\n  Talk is cheap. Show me the code.\n</h3><p>Linus Torvalds</p></foreignObject></svg>",
			);
		})
		.await;
	let config = ProviderConfig::default().with_endpoint(Url::parse(&server.url("/api"))?);
	let provider = ReqwestQuoteProvider::new(config)?;
	let quote = provider.get_quote().await?;

	println!("Fetched: {quote}.");

	let again = provider.get_quote().await?;

	println!("Cached:  {again} (fetched at {:?}).", provider.fetched_at());

	card_mock.assert_async().await;

	Ok(())
}
