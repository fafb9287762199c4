#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub capacity: u32,
    #[serde(default)]
    pub registered: u32,
}

impl Portfolio {
    pub fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.registered)
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }
}
