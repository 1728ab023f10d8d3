//! Canonical names keyed by source slugs.
//!
//! Some keys exist twice: once for the properly decoded French label and once
//! for the mojibake spelling (`esthatique`, `apilation`, ...) that appears when
//! a UTF-8 export was saved through the Latin-1 path.

/// Canonical category for a source category slug.
pub fn category(slug: &str) -> Option<&'static str> {
    match slug {
        "esthetique" | "esthatique" | "beauty" => Some("Beauty"),
        "coiffure" => Some("Hair"),
        _ => None,
    }
}

/// `(display prefix, canonical subcategory)` for a source subcategory slug.
pub fn subcategory(slug: &str) -> Option<(&'static str, &'static str)> {
    let hit = match slug {
        "epilation" | "apilation" => ("Waxing", "Waxing"),
        "manucure" => ("Manicure", "Manicure"),
        "vernis" => ("Nail Polish", "Manicure"),
        "faux_ongles" => ("Artificial Nails", "Manicure"),
        "beaute_des_pieds" | "beauta_des_pieds" => ("Foot Care", "Manicure"),
        "maquillage" => ("Makeup", "Beauty Services"),
        "extensions_de_cils" => ("Lash Extensions", "Beauty Services"),
        "teinture_des_cils_et_sourcils" => ("Tinting", "Beauty Services"),
        "soins_du_visage" => ("Facial Treatments", "Beauty Services"),
        "soins_du_corps" => ("Body Treatments", "Beauty Services"),
        "actes_coiffure" => ("Hair Styling", "Hair Styling"),
        "soins_des_cheveux" => ("Hair Care", "Hair Services"),
        "coloration" => ("Color Services", "Hair Services"),
        "extensions" => ("Hair Extensions", "Hair Services"),
        "coiffures_de_ceremonie" | "coiffures_de_caramonie" => ("Event Styling", "Hair Services"),
        _ => return None,
    };
    Some(hit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mojibake_keys_share_targets() {
        assert_eq!(category("esthetique"), category("esthatique"));
        assert_eq!(subcategory("epilation"), subcategory("apilation"));
        assert_eq!(subcategory("beaute_des_pieds"), subcategory("beauta_des_pieds"));
        assert_eq!(
            subcategory("coiffures_de_ceremonie"),
            subcategory("coiffures_de_caramonie")
        );
    }

    #[test]
    fn empty_slug_never_matches() {
        assert_eq!(category(""), None);
        assert_eq!(subcategory(""), None);
    }

    #[test]
    fn haircuts_get_their_own_group() {
        assert_eq!(subcategory("actes_coiffure"), Some(("Hair Styling", "Hair Styling")));
    }

    #[test]
    fn prefix_differs_from_group() {
        assert_eq!(subcategory("vernis"), Some(("Nail Polish", "Manicure")));
        assert_eq!(subcategory("coloration"), Some(("Color Services", "Hair Services")));
    }
}
