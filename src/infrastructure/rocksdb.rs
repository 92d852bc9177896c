use crate::domain::member::{Member, MemberId};
use crate::domain::ports::MemberStore;
use crate::error::{MembershipError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing member records.
pub const CF_MEMBERS: &str = "members";

/// A persistent member store backed by RocksDB.
///
/// Members are stored as JSON under their big-endian id, so iteration returns
/// them ordered by id.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBMemberStore {
    db: Arc<DB>,
}

impl RocksDBMemberStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "members" column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_members = ColumnFamilyDescriptor::new(CF_MEMBERS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_members])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn put(&self, member: &Member) -> Result<()> {
        let cf = self.members_cf()?;
        let value = serde_json::to_vec(member).map_err(|e| {
            MembershipError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization error: {}", e),
            )))
        })?;
        self.db.put_cf(&cf, member.id.0.to_be_bytes(), value)?;
        Ok(())
    }

    fn members_cf(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(CF_MEMBERS).ok_or_else(|| {
            MembershipError::InternalError(Box::new(std::io::Error::other(
                "Members column family not found",
            )))
        })
    }
}

fn decode(bytes: &[u8]) -> Result<Member> {
    serde_json::from_slice(bytes).map_err(|e| {
        MembershipError::InternalError(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Deserialization error: {}", e),
        )))
    })
}

#[async_trait]
impl MemberStore for RocksDBMemberStore {
    async fn get(&self, member_id: MemberId) -> Result<Option<Member>> {
        let cf = self.members_cf()?;
        match self.db.get_cf(&cf, member_id.0.to_be_bytes())? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn all_members(&self) -> Result<Vec<Member>> {
        let cf = self.members_cf()?;
        let mut members = Vec::new();
        for item in self.db.iterator_cf(&cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            members.push(decode(&value)?);
        }
        Ok(members)
    }

    async fn update(&self, member: Member) -> Result<()> {
        self.put(&member)
    }

    async fn insert(&self, member: Member) -> Result<()> {
        self.put(&member)
    }
}
