/// Liveness probe; does not contact the upstream API
pub async fn health() -> &'static str {
	"OK"
}
