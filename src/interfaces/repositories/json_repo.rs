use crate::db::json_store::JsonStore;

#[derive(Clone)]
pub struct JsonAboutRepo {
    pub store: JsonStore,
}

#[derive(Clone)]
pub struct JsonProjectRepo {
    pub store: JsonStore,
}
