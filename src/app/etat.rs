//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l'état de la calculatrice (registre pré-garni, entrée,
//! résultat, erreur, historique) et offrir des opérations simples
//! (C/CLR/AC) sans logique d'affichage.
//!
//! Contrats :
//! - Aucun découpage d'expression ici (c'est le noyau qui évalue).
//! - Actions déterministes, sans effet de bord caché.
//! - Garde-fou : l'historique est borné.

use crate::noyau::operations::{addition, division, multiplication, soustraction};
use crate::noyau::Calculatrice;

/// Garde-fou : on borne l'historique (anti-abus / anti-gonflement).
const HISTORIQUE_MAX: usize = 50;

pub struct AppCalc {
    // --- moteur ---
    // Registre pré-garni avec + - * / ; l'utilisateur peut taper n'importe
    // quelle expression "a op b", les symboles inconnus remontent en erreur.
    pub calculatrice: Calculatrice,

    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier résultat affiché
    pub erreur: String,   // message d'erreur (si l'évaluation échoue)

    // --- historique (lignes "expr = valeur", la plus récente en tête) ---
    pub historique: Vec<String>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        let mut calculatrice = Calculatrice::new();
        calculatrice.ajouter('+', addition);
        calculatrice.ajouter('-', soustraction);
        calculatrice.ajouter('*', multiplication);
        calculatrice.ajouter('/', division);

        Self {
            calculatrice,
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            historique: Vec::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultat + historique).
    /// Le registre, lui, reste garni.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée (sans toucher au résultat).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur (sans toucher à l'entrée ni à
    /// l'historique).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX : on CONSERVE `resultat` (dernier affichage) pour ne pas
    /// “effacer l'écran” sur une faute de frappe.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat et pousser la ligne en historique.
    pub fn set_resultat(&mut self, expression: &str, valeur: i64) {
        self.erreur.clear();
        self.resultat = valeur.to_string();

        self.historique.insert(0, format!("{expression} = {valeur}"));
        self.historique.truncate(HISTORIQUE_MAX);

        self.focus_entree = true;
    }
}
