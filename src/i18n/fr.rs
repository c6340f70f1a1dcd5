//! French translations / Traductions fran\u{00E7}aises

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Calculateur de consommation \u{00E9}nerg\u{00E9}tique".into());
    t.insert("app.subtitle".into(), "Estimez votre consommation mensuelle selon votre logement et vos appareils".into());

    // Form sections
    t.insert("form.personal".into(), "Informations personnelles".into());
    t.insert("form.housing".into(), "Logement".into());
    t.insert("form.appliances".into(), "Appareils".into());

    // Form fields
    t.insert("form.name".into(), "Nom".into());
    t.insert("form.age".into(), "\u{00C2}ge".into());
    t.insert("form.city".into(), "Ville".into());
    t.insert("form.area".into(), "Quartier".into());
    t.insert("form.dwelling".into(), "Type de logement".into());
    t.insert("form.rooms".into(), "Configuration".into());
    t.insert("form.unselected".into(), "(choisir)".into());
    t.insert("form.calculate".into(), "Calculer la consommation".into());
    t.insert("form.submitted".into(), "Calcul termin\u{00E9} !".into());
    t.insert("form.missing".into(), "Veuillez remplir tous les champs obligatoires".into());

    // Dwelling types
    t.insert("dwelling.flat".into(), "Appartement".into());
    t.insert("dwelling.tenement".into(), "Immeuble".into());
    t.insert("dwelling.bungalow".into(), "Pavillon".into());

    // Appliances
    t.insert("appliance.ac".into(), "Climatiseur".into());
    t.insert("appliance.fridge".into(), "R\u{00E9}frig\u{00E9}rateur".into());
    t.insert("appliance.washing_machine".into(), "Lave-linge".into());
    t.insert("appliance.none".into(), "Aucun appareil majeur".into());
    t.insert("breakdown.base".into(), "\u{00C9}clairage et ventilateurs".into());

    // Result
    t.insert("result.title".into(), "R\u{00E9}sultat".into());
    t.insert("result.monthly_for".into(), "Consommation mensuelle de".into());
    t.insert("result.monthly".into(), "Mensuel".into());
    t.insert("result.daily".into(), "Moyenne journali\u{00E8}re".into());
    t.insert("result.breakdown".into(), "R\u{00E9}partition de la consommation".into());
    t.insert("result.cost".into(), "Co\u{00FB}t estim\u{00E9}".into());
    t.insert("result.rate".into(), "Tarif".into());
    t.insert("result.personal".into(), "Informations personnelles".into());
    t.insert("result.housing".into(), "Logement".into());
    t.insert("result.appliances".into(), "Appareils".into());
    t.insert("result.location".into(), "Lieu".into());
    t.insert("result.type".into(), "Type".into());
    t.insert("result.configuration".into(), "Configuration".into());

    // Tips
    t.insert("tips.title".into(), "Conseils d'\u{00E9}conomie d'\u{00E9}nergie".into());
    t.insert("tips.1".into(), "Utilisez des ampoules LED pour \u{00E9}conomiser jusqu'\u{00E0} 80 % d'\u{00E9}nergie".into());
    t.insert("tips.2".into(), "R\u{00E9}glez la climatisation \u{00E0} 24\u{00B0}C ou plus".into());
    t.insert("tips.3".into(), "D\u{00E9}branchez les appareils inutilis\u{00E9}s pour \u{00E9}viter la consommation en veille".into());
    t.insert("tips.4".into(), "Profitez de la lumi\u{00E8}re naturelle en journ\u{00E9}e".into());
    t.insert("tips.5".into(), "Entretenez r\u{00E9}guli\u{00E8}rement vos appareils".into());

    // About
    t.insert("about.title".into(), "Ce que nous calculons".into());
    t.insert("about.base".into(), "Consommation de base : \u{00E9}clairage et ventilateurs selon la taille du logement".into());
    t.insert("about.ac".into(), "Climatiseur : 90 kWh par mois".into());
    t.insert("about.fridge".into(), "R\u{00E9}frig\u{00E9}rateur : 120 kWh par mois".into());
    t.insert("about.washing_machine".into(), "Lave-linge : 60 kWh par mois".into());
    t.insert("about.footer".into(), "Estimations bas\u{00E9}es sur des usages typiques.".into());

    // Units
    t.insert("unit.kwh".into(), "kWh".into());
    t.insert("unit.per_day".into(), "/jour".into());
    t.insert("unit.per_month".into(), "/mois".into());

    // Status bar help
    t.insert("help.form".into(), "\u{2191}\u{2193} : D\u{00E9}placer | Entr\u{00E9}e : Modifier/Valider | \u{2190}\u{2192} : Changer | Espace : Cocher | ? : Aide | q : Quitter".into());
    t.insert("help.editing".into(), "Entr\u{00E9}e : Confirmer | \u{00C9}chap : Annuler".into());
    t.insert("help.result".into(), "r : Recalculer | q : Retour au formulaire".into());
    t.insert("help.about".into(), "q : Retour".into());

    t
}
