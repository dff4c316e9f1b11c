use jotpad::notestore::BoxedNoteStore;
use jotpad::InMemoryStore;

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    populatestore: bool,
}

impl Settings {
    pub async fn get_note_store(&self) -> BoxedNoteStore {
        let store: BoxedNoteStore = Box::new(InMemoryStore::new());
        if self.populatestore {
            jotpad::notestore::util::populate_demo_data(&store).await;
        }
        store
    }
}

lazy_static! {
    pub static ref CONFIGURATION: Settings =
        get_configuration().expect("Failed to read configuration.");
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let config = config::Config::builder()
        .set_default("debug", false)?
        .set_default("host", "localhost")?
        .set_default("port", 5000)?
        .set_default("populatestore", false)?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::default()
                .prefix("jotpad")
                .separator("_"),
        )
        .build()?;
    config.try_deserialize()
}
