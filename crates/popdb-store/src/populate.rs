use rand::Rng;
use tracing::info;

use popdb_generate::PersonGenerator;

use crate::adapter::Adapter;
use crate::errors::StoreError;
use crate::session::Session;

/// Rows written per target when no count is configured.
pub const DEFAULT_ROW_COUNT: usize = 100;

/// Generate `count` people, stage them in `session` and commit once.
///
/// Any failure aborts the whole batch; nothing is retried.
pub async fn populate<A, R>(
    session: &mut Session<'_, A>,
    generator: &PersonGenerator,
    rng: &mut R,
    count: usize,
) -> Result<u64, StoreError>
where
    A: Adapter + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..count {
        let person = generator.generate(rng);
        session.add(&person)?;
    }

    info!(
        event = "records_staged",
        table = %session.table().name,
        rows = session.staged()
    );
    session.commit().await
}
