pub mod conference;
pub mod division;
pub mod league;
pub mod player;
pub mod team;

pub use conference::Entity as Conference;
pub use division::Entity as Division;
pub use league::Entity as League;
pub use player::Entity as Player;
pub use team::Entity as Team;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait};

/// Capabilities every managed entity declares, resolved once per record
/// type at compile time.
pub trait StoreEntity: EntityTrait + Send + Sync + 'static {
    /// ActiveModel type used for inserts and whole-record updates.
    type ActiveModel: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send;

    /// Name used in log lines and error messages.
    const NAME: &'static str;

    /// Logical-delete policy, for record types that carry one. `None`
    /// means deletion removes the row.
    fn soft_delete() -> Option<SoftDelete<Self>> {
        None
    }
}

/// Logical-delete policy: which column flags a deleted record, and how to
/// stamp a record as deleted.
pub struct SoftDelete<E: StoreEntity> {
    /// Column holding the deleted flag; default reads filter on it.
    pub flag: E::Column,
    /// Stamps the flag and deletion timestamp onto a record.
    pub mark: fn(E::Model, DateTimeUtc) -> <E as StoreEntity>::ActiveModel,
}
