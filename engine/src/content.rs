use std::collections::HashMap;

pub fn builtin_campaigns() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("warrens", include_str!("../content/campaigns/warrens.json")),
        ("descent", include_str!("../content/campaigns/descent.json")),
    ])
}
