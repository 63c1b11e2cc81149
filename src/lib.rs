//! Calculatrice à registre — bibliothèque
//!
//! Organisation :
//! - noyau : registre d'opérations (symbole -> fonction) + évaluateur "a op b"
//! - eleve : fiches élèves, sérialisation JSON en tampon borné (indépendant)
//! - app   : interface egui (natif + wasm), mince couche au-dessus du noyau

pub mod app;
pub mod eleve;
pub mod noyau;
