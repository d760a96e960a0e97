use crate::{Cli, DemoResult};

use roster_config::Config;
use roster_core::User;
use roster_db::{Database, UserDao};

use log::info;

/// Open the database the config points at
pub async fn open_database(config: &Config) -> DemoResult<Database> {
    let policy = config.database.conflict_policy;

    let db = if config.database.in_memory {
        Database::open_in_memory(policy).await?
    } else {
        let path = config.database_path()?;
        info!("Connecting to database: {}", path.display());
        Database::open(path, policy).await?
    };

    Ok(db)
}

/// Insert a user built from the form fields. Both names must be non-empty,
/// otherwise nothing is stored and `None` is returned.
pub async fn insert_new_user(users: &dyn UserDao, cli: &Cli) -> DemoResult<Option<i64>> {
    if cli.first.is_empty() || cli.last.is_empty() {
        info!("First and last name are both required, nothing inserted");
        return Ok(None);
    }

    let user = match cli.uid {
        Some(uid) => User::new(uid, Some(cli.first.clone()), Some(cli.last.clone())),
        None => User::from_names(cli.first.clone(), cli.last.clone()),
    };

    let row_ids = users.insert_all(std::slice::from_ref(&user)).await?;
    let row_id = row_ids.first().copied();

    if let Some(id) = row_id {
        info!("Inserted uid {} with row id {}", user.uid, id);
    }

    Ok(row_id)
}

/// Open, list, insert, close. The database is closed on every path.
pub async fn run(config: &Config, cli: &Cli) -> DemoResult<Option<i64>> {
    let db = open_database(config).await?;

    let result = run_with(&db, cli).await;

    db.close().await;
    result
}

async fn run_with(db: &Database, cli: &Cli) -> DemoResult<Option<i64>> {
    let users = db.users();

    let existing = users.get_all().await?;
    info!("{} user(s) currently stored", existing.len());

    insert_new_user(&users, cli).await
}
