use crate::{
    models::{cart::CartEntryDoc, menu::MenuItemDoc, testimonial::TestimonialDoc, user::UserDoc},
    response::ServerResult,
};
use mongodb::bson::doc;
use mongodb::{Client, Collection, IndexModel, options::ClientOptions};

#[derive(Clone)]
pub struct Mongo {
    pub client: Client,
    pub db_name: String,
}

impl Mongo {
    /// Builds the driver handle. No connection is made until the first operation.
    pub async fn connect(url: &str, db_name: &str) -> ServerResult<Self> {
        let mut opts = ClientOptions::parse(url).await?;
        opts.app_name = Some("bistro-boss".into());
        let client = Client::with_options(opts)?;
        Ok(Self {
            client,
            db_name: db_name.into(),
        })
    }

    fn col<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.client.database(&self.db_name).collection(name)
    }

    pub fn menu(&self) -> Collection<MenuItemDoc> {
        self.col("menuItems")
    }

    pub fn testimonials(&self) -> Collection<TestimonialDoc> {
        self.col("testimonials")
    }

    pub fn users(&self) -> Collection<UserDoc> {
        self.col("users")
    }

    pub fn carts(&self) -> Collection<CartEntryDoc> {
        self.col("carts")
    }

    pub async fn ping(&self) -> ServerResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    pub async fn ensure_indexes(&self) -> ServerResult<()> {
        // Not unique: duplicate emails are prevented by the lookup in UserDoc::create.
        self.users()
            .create_index(IndexModel::builder().keys(doc! { "email": 1 }).build())
            .await?;

        self.carts()
            .create_index(IndexModel::builder().keys(doc! { "email": 1 }).build())
            .await?;

        Ok(())
    }
}
