//! Static translation tables for navigation and landing copy.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use leptos::prelude::*;

use crate::state::prefs::{Language, PrefsState};

const EN: &[(&str, &str)] = &[
    ("app.name", "Food Bridge"),
    ("app.tagline", "Connecting Food Donors with Recipients"),
    ("app.description", "Join our mission to reduce food waste and help those in need"),
    ("nav.login", "Login"),
    ("nav.signup", "Sign Up"),
    ("nav.dashboard", "Dashboard"),
    ("nav.logFood", "Log Food"),
    ("nav.matches", "Matches"),
    ("nav.schedule", "Schedule"),
    ("nav.impact", "Impact"),
    ("nav.notifications", "Notifications"),
    ("nav.search", "Search"),
    ("nav.support", "Support"),
    ("nav.settings", "Settings"),
    ("nav.community", "Community"),
    ("nav.logout", "Logout"),
    ("hero.title", "Make a Difference Today"),
    ("hero.subtitle", "Connect with local food donors and recipients"),
    ("features.title", "How It Works"),
    ("features.donor.title", "For Donors"),
    ("features.donor.description", "Easily donate surplus food and track your impact"),
    ("features.recipient.title", "For Recipients"),
    ("features.recipient.description", "Find available food donations in your area"),
    ("cta.title", "Ready to Make a Difference?"),
    ("cta.description", "Join our community of food donors and recipients"),
    ("cta.donor", "Become a Donor"),
    ("cta.recipient", "Become a Recipient"),
];

const ES: &[(&str, &str)] = &[
    ("app.tagline", "Conectando Donantes de Alimentos con Receptores"),
    (
        "app.description",
        "Únete a nuestra misión para reducir el desperdicio de alimentos y ayudar a los necesitados",
    ),
    ("nav.login", "Iniciar Sesión"),
    ("nav.signup", "Registrarse"),
    ("nav.dashboard", "Panel"),
    ("nav.logFood", "Registrar Alimentos"),
    ("nav.matches", "Coincidencias"),
    ("nav.schedule", "Programación"),
    ("nav.impact", "Impacto"),
    ("nav.notifications", "Notificaciones"),
    ("nav.search", "Buscar"),
    ("nav.support", "Soporte"),
    ("nav.settings", "Ajustes"),
    ("nav.community", "Comunidad"),
    ("nav.logout", "Cerrar Sesión"),
    ("hero.title", "Haz la Diferencia Hoy"),
    ("hero.subtitle", "Conéctate con donantes y receptores locales de alimentos"),
    ("features.title", "Cómo Funciona"),
    ("features.donor.title", "Para Donantes"),
    ("features.donor.description", "Dona fácilmente alimentos excedentes y sigue tu impacto"),
    ("features.recipient.title", "Para Receptores"),
    ("features.recipient.description", "Encuentra donaciones de alimentos disponibles en tu área"),
    ("cta.title", "¿Listo para Hacer la Diferencia?"),
    ("cta.description", "Únete a nuestra comunidad de donantes y receptores de alimentos"),
    ("cta.donor", "Conviértete en Donante"),
    ("cta.recipient", "Conviértete en Receptor"),
];

const FR: &[(&str, &str)] = &[
    ("app.tagline", "Connecter les Donateurs de Nourriture aux Bénéficiaires"),
    (
        "app.description",
        "Rejoignez notre mission pour réduire le gaspillage alimentaire et aider les nécessiteux",
    ),
    ("nav.login", "Connexion"),
    ("nav.signup", "S'inscrire"),
    ("nav.dashboard", "Tableau de Bord"),
    ("nav.logFood", "Enregistrer la Nourriture"),
    ("nav.matches", "Correspondances"),
    ("nav.schedule", "Programme"),
    ("nav.impact", "Impact"),
    ("nav.notifications", "Notifications"),
    ("nav.search", "Rechercher"),
    ("nav.support", "Assistance"),
    ("nav.settings", "Paramètres"),
    ("nav.community", "Communauté"),
    ("nav.logout", "Déconnexion"),
    ("hero.title", "Faites la Différence Aujourd'hui"),
    ("hero.subtitle", "Connectez-vous avec les donateurs et bénéficiaires locaux"),
    ("features.title", "Comment Ça Marche"),
    ("features.donor.title", "Pour les Donateurs"),
    ("features.donor.description", "Donnez facilement vos surplus et suivez votre impact"),
    ("features.recipient.title", "Pour les Bénéficiaires"),
    ("features.recipient.description", "Trouvez des dons alimentaires disponibles près de chez vous"),
    ("cta.title", "Prêt à Faire la Différence ?"),
    ("cta.description", "Rejoignez notre communauté de donateurs et de bénéficiaires"),
    ("cta.donor", "Devenir Donateur"),
    ("cta.recipient", "Devenir Bénéficiaire"),
];

fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::En => EN,
        Language::Es => ES,
        Language::Fr => FR,
    }
}

fn lookup(entries: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Translate `key`, falling back to English and then to the key itself.
#[must_use]
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    lookup(table(language), key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}

/// Reactive translator bound to the language preference in context.
pub fn use_translate() -> impl Fn(&'static str) -> &'static str + Copy + Send + Sync + 'static {
    let prefs = expect_context::<RwSignal<PrefsState>>();
    move |key| translate(prefs.with(|p| p.language), key)
}
