use mongodb::{Client, Collection, Database};

use crate::store::{Collection as StoreCollection, StoreError};

const DEFAULT_DATABASE: &str = "classroom";

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, StoreError> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        // Timeouts
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        // Database name comes from the URI path, e.g. mongodb://host:27017/classroom
        let db_name = client_options
            .default_database
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        // Test connection
        db.list_collection_names().await?;
        log::info!("✅ Connected to MongoDB database: {}", db_name);

        let mongodb = Self { client, db };
        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the indexes used by the registration lookups.
    ///
    /// Teachers and students are keyed by `_id`, so only registrations need
    /// a secondary index.
    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        use mongodb::bson::doc;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let registrations = self.raw_collection(StoreCollection::Registrations);

        let teacher_index = IndexModel::builder()
            .keys(doc! { "teacher_email": 1 })
            .build();

        match registrations.create_index(teacher_index).await {
            Ok(_) => log::info!("   ✅ Index created: registrations(teacher_email)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        let student_index = IndexModel::builder()
            .keys(doc! { "student_email": 1 })
            .build();

        match registrations.create_index(student_index).await {
            Ok(_) => log::info!("   ✅ Index created: registrations(student_email)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, collection: StoreCollection) -> Collection<T> {
        self.db.collection(collection.name())
    }

    pub fn raw_collection(&self, collection: StoreCollection) -> Collection<mongodb::bson::Document> {
        self.collection(collection)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
