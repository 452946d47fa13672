#[derive(Debug, Serialize, Deserialize)]
pub struct SlugRequestV1 {
    #[serde(default)]
    pub parts: Vec<Option<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlugV1 {
    pub slug: String,
}

json_responder!(SlugV1);

#[derive(Debug, Serialize, Deserialize)]
pub struct NameRequestV1 {
    #[serde(default)]
    pub delimiter: String,
    #[serde(default)]
    pub parts: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NameV1 {
    pub name: String,
}

json_responder!(NameV1);
