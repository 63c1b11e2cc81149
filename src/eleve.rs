//! src/eleve.rs
//!
//! Fiches élèves : module indépendant (aucun lien avec le noyau
//! calculatrice, dans aucun sens).
//!
//! Rôle :
//! - une fiche à gabarit fixe (prénom, nom, matricule)
//! - sérialisation JSON dans un tampon borné fourni par l'appelant
//! - une réserve à capacité fixe avec réutilisation de places
//!
//! Contrats :
//! - prénom/nom sont tronqués à la création (gabarit fixe, pas d'erreur)
//! - la sérialisation peut laisser un préfixe dans le tampon quand elle
//!   échoue; seul le compte retourné fait foi
//! - les champs sont recopiés tels quels (pas d'échappement JSON)

use std::io::Write;

use thiserror::Error;

/// Longueur maximale conservée (en caractères) pour prénom et nom.
const LONG_MAX_CHAMP: usize = 19;

/// Capacité de la réserve de fiches.
pub const RESERVE_MAX: usize = 2;

/// Fiche élève à gabarit fixe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Eleve {
    prenom: String,
    nom: String,
    matricule: u32,
}

/// Échec de sérialisation dans un tampon borné.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurSerialisation {
    #[error("tampon trop petit pour la fiche")]
    TamponTropPetit,
}

/// Tronque au gabarit du champ, sans couper un caractère en deux.
fn tronquer(valeur: &str) -> String {
    valeur.chars().take(LONG_MAX_CHAMP).collect()
}

impl Eleve {
    /// Crée une fiche; prénom et nom sont tronqués au gabarit.
    pub fn new(prenom: &str, nom: &str, matricule: u32) -> Self {
        Self {
            prenom: tronquer(prenom),
            nom: tronquer(nom),
            matricule,
        }
    }

    pub fn prenom(&self) -> &str {
        &self.prenom
    }

    pub fn nom(&self) -> &str {
        &self.nom
    }

    pub fn matricule(&self) -> u32 {
        self.matricule
    }

    /// Sérialise la fiche en JSON dans `tampon` :
    /// `{"prenom":"…","nom":"…","matricule":"…"}`
    /// (le matricule est cité comme les autres champs).
    ///
    /// Retourne le nombre d'octets écrits, ou une erreur si le tampon ne
    /// suffit pas (un préfixe peut déjà y avoir été déposé).
    pub fn serialiser(&self, tampon: &mut [u8]) -> Result<usize, ErreurSerialisation> {
        let capacite = tampon.len();

        // `&mut [u8]` implémente io::Write : la tranche avance à chaque
        // écriture, l'écriture incomplète devient une erreur.
        let mut curseur: &mut [u8] = tampon;
        write!(
            curseur,
            "{{\"prenom\":\"{}\",\"nom\":\"{}\",\"matricule\":\"{}\"}}",
            self.prenom, self.nom, self.matricule
        )
        .map_err(|_| ErreurSerialisation::TamponTropPetit)?;

        Ok(capacite - curseur.len())
    }
}

/* ------------------------ Réserve à capacité fixe ------------------------ */

/// Réserve de fiches à capacité fixe, avec réutilisation de places.
///
/// L'équivalent possédé du vieux pool statique : chaque place est libre
/// ou occupée, `emprunter` prend la première place libre, `rendre` la
/// libère pour un emprunt futur.
#[derive(Debug, Default)]
pub struct ReserveEleves {
    places: [Option<Eleve>; RESERVE_MAX],
}

impl ReserveEleves {
    /// Réserve entièrement libre.
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupe la première place libre; `None` si la réserve est pleine.
    pub fn emprunter(&mut self, prenom: &str, nom: &str, matricule: u32) -> Option<usize> {
        let place = self.places.iter().position(Option::is_none)?;
        self.places[place] = Some(Eleve::new(prenom, nom, matricule));
        Some(place)
    }

    /// Fiche occupant `place`, si elle existe.
    pub fn fiche(&self, place: usize) -> Option<&Eleve> {
        self.places.get(place)?.as_ref()
    }

    /// Libère `place`. Retourne `false` si la place était déjà libre
    /// (ou hors réserve) : rien ne bouge.
    pub fn rendre(&mut self, place: usize) -> bool {
        match self.places.get_mut(place) {
            Some(occupee) if occupee.is_some() => {
                *occupee = None;
                true
            }
            _ => false,
        }
    }

    /// Nombre de places encore libres.
    pub fn places_libres(&self) -> usize {
        self.places.iter().filter(|p| p.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::{Eleve, ErreurSerialisation, ReserveEleves, RESERVE_MAX};

    #[test]
    fn serialisation_fiche_complete() {
        let fiche = Eleve::new("Ada", "Lovelace", 1815);
        let mut tampon = [0u8; 128];

        let ecrits = fiche.serialiser(&mut tampon).unwrap();
        let texte = std::str::from_utf8(&tampon[..ecrits]).unwrap();

        assert_eq!(
            texte,
            "{\"prenom\":\"Ada\",\"nom\":\"Lovelace\",\"matricule\":\"1815\"}"
        );
    }

    #[test]
    fn serialisation_est_du_json_valide() {
        let fiche = Eleve::new("Blaise", "Pascal", 1623);
        let mut tampon = [0u8; 128];
        let ecrits = fiche.serialiser(&mut tampon).unwrap();
        let texte = std::str::from_utf8(&tampon[..ecrits]).unwrap();

        let v: serde_json::Value = serde_json::from_str(texte).unwrap();
        assert_eq!(v["prenom"], "Blaise");
        assert_eq!(v["nom"], "Pascal");
        assert_eq!(v["matricule"], "1623");
    }

    #[test]
    fn tampon_juste_et_tampon_trop_petit() {
        let fiche = Eleve::new("Ada", "Lovelace", 1815);

        let mut grand = [0u8; 128];
        let ecrits = fiche.serialiser(&mut grand).unwrap();

        // Tampon exactement à la taille : ça passe.
        let mut juste = vec![0u8; ecrits];
        assert_eq!(fiche.serialiser(&mut juste), Ok(ecrits));

        // Un octet de moins : refus.
        let mut court = vec![0u8; ecrits - 1];
        assert_eq!(
            fiche.serialiser(&mut court),
            Err(ErreurSerialisation::TamponTropPetit)
        );

        // Tampon vide : refus aussi.
        assert_eq!(
            fiche.serialiser(&mut []),
            Err(ErreurSerialisation::TamponTropPetit)
        );
    }

    #[test]
    fn champs_tronques_au_gabarit() {
        let fiche = Eleve::new(
            "PrenomBeaucoupTropLongPourLaFiche",
            "NomCourtOk",
            7,
        );
        assert_eq!(fiche.prenom(), "PrenomBeaucoupTropL");
        assert_eq!(fiche.prenom().chars().count(), 19);
        assert_eq!(fiche.nom(), "NomCourtOk");
    }

    #[test]
    fn reserve_emprunt_jusqu_a_plein() {
        let mut reserve = ReserveEleves::new();
        assert_eq!(reserve.places_libres(), RESERVE_MAX);

        let p0 = reserve.emprunter("Ada", "Lovelace", 1).unwrap();
        let p1 = reserve.emprunter("Alan", "Turing", 2).unwrap();
        assert_ne!(p0, p1);
        assert_eq!(reserve.places_libres(), 0);

        // Pleine : l'emprunt suivant échoue sans toucher aux fiches.
        assert!(reserve.emprunter("Grace", "Hopper", 3).is_none());
        assert_eq!(reserve.fiche(p0).unwrap().prenom(), "Ada");
        assert_eq!(reserve.fiche(p1).unwrap().prenom(), "Alan");
    }

    #[test]
    fn reserve_rendre_puis_reutiliser() {
        let mut reserve = ReserveEleves::new();
        let p0 = reserve.emprunter("Ada", "Lovelace", 1).unwrap();
        let _p1 = reserve.emprunter("Alan", "Turing", 2).unwrap();

        assert!(reserve.rendre(p0));
        assert!(reserve.fiche(p0).is_none());
        assert_eq!(reserve.places_libres(), 1);

        // Rendre deux fois la même place : refus.
        assert!(!reserve.rendre(p0));

        // La place rendue est réutilisée.
        let p2 = reserve.emprunter("Grace", "Hopper", 3).unwrap();
        assert_eq!(p2, p0);
        assert_eq!(reserve.fiche(p2).unwrap().nom(), "Hopper");
    }

    #[test]
    fn reserve_place_hors_bornes() {
        let mut reserve = ReserveEleves::new();
        assert!(reserve.fiche(RESERVE_MAX + 5).is_none());
        assert!(!reserve.rendre(RESERVE_MAX + 5));
    }
}
