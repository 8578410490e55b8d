//! Built-in localized portfolio content.
//!
//! The interactive components treat this purely as supplied data; swapping it
//! for another source changes nothing about their behavior.

use crate::content::{ContentRecord, MediaIcon, MediaSlots, MediaStyle};
use crate::locale::Locale;

/// A content section split into an always-visible primary sequence and an
/// overflow sequence revealed by the show-more toggle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub primary: Vec<ContentRecord>,
    pub overflow: Vec<ContentRecord>,
}

impl Section {
    /// Union of both sequences, primary first. Overlay resolution runs
    /// against this.
    pub fn all(&self) -> Vec<ContentRecord> {
        self.primary
            .iter()
            .chain(self.overflow.iter())
            .cloned()
            .collect()
    }
}

/// Localized static page copy (headings and hero text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headings {
    pub hero_subtitle: &'static str,
    pub experience: &'static str,
    pub experience_accent: &'static str,
    pub showcase: &'static str,
    pub showcase_accent: &'static str,
    pub other_work: &'static str,
    pub other_work_accent: &'static str,
}

/// All portfolio content for one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub headings: Headings,
    pub experience: Vec<ContentRecord>,
    pub showcase: Section,
    pub other_work: Section,
}

/// Content for `locale`.
pub fn catalog(locale: Locale) -> Catalog {
    match locale {
        Locale::En => english(),
        Locale::Fr => french(),
    }
}

fn english() -> Catalog {
    Catalog {
        headings: Headings {
            hero_subtitle: "Spatial computing & XR engineering",
            experience: "Experience",
            experience_accent: "timeline",
            showcase: "Selected",
            showcase_accent: "work",
            other_work: "Other",
            other_work_accent: "realizations",
        },
        experience: vec![
            ContentRecord::new(
                "exp-spatial-lab",
                "XR Developer",
                "Prototyped spatial-computing experiences for industrial clients, \
                 from concept sketches to shipped visionOS apps.",
            )
            .subtitle("Spatial Lab")
            .period("2023 — present")
            .details([
                "Owned the full lifecycle of three visionOS applications: concept \
                 validation with design, RealityKit scene construction, and App \
                 Store delivery.",
                "Built a shared interaction library for gaze-and-pinch affordances \
                 reused across every client project.",
            ])
            .tags(["visionOS", "RealityKit", "SwiftUI", "Swift"]),
            ContentRecord::new(
                "exp-orbital",
                "Mobile Engineer",
                "Delivered AR try-on features for a retail app used by two million \
                 monthly shoppers.",
            )
            .subtitle("Orbital Studio")
            .period("2021 — 2023")
            .details([
                "Shipped the face-tracking try-on pipeline and cut cold-start time \
                 from four seconds to under one.",
                "Mentored two junior engineers through their first production \
                 releases.",
            ])
            .tags(["ARKit", "iOS", "Metal"]),
            ContentRecord::new(
                "exp-freelance",
                "Freelance Developer",
                "Built marketing sites and interactive product configurators for \
                 small studios.",
            )
            .subtitle("Independent")
            .period("2019 — 2021")
            .tags(["Web", "Three.js", "Design"]),
        ],
        showcase: Section {
            primary: vec![
                ContentRecord::new(
                    "show-vehicle",
                    "Vehicle Showcase",
                    "Full-scale vehicle configurator in mixed reality: walk around \
                     the car, open the doors, swap trims in place.",
                )
                .details([
                    "Reality Composer Pro scenes streamed on demand keep the \
                     initial download under 200 MB despite film-quality assets.",
                    "A bespoke occlusion shader grounds the vehicle convincingly \
                     on any floor the headset can see.",
                ])
                .tags(["visionOS", "RealityKit", "Reality Composer Pro", "SwiftUI"])
                .media(MediaStyle::new("var(--media-aurora)").slots(MediaSlots::Six)),
                ContentRecord::new(
                    "show-turbine",
                    "Turbine Viewer",
                    "Exploded-view inspection tool for wind-turbine nacelles, used \
                     in technician training.",
                )
                .details([
                    "Each of the 140 components can be isolated, sectioned, and \
                     annotated in place.",
                ])
                .tags(["visionOS", "RealityKit", "SwiftUI"])
                .media(MediaStyle::new("var(--media-tide)").slots(MediaSlots::Two)),
                ContentRecord::new(
                    "show-ceramics",
                    "Ceramics Viewer",
                    "Museum companion presenting fragile ceramics as tabletop \
                     holograms with curator commentary.",
                )
                .details([
                    "Photogrammetry captures at 16K texture resolution, decimated \
                     per device tier.",
                ])
                .tags(["visionOS", "RealityKit", "Reality Composer Pro"])
                .media(MediaStyle::new("var(--media-ember)").slots(MediaSlots::One)),
            ],
            overflow: vec![
                ContentRecord::new(
                    "show-atrium",
                    "Atrium Walkthrough",
                    "Architectural pre-visualization letting clients pace through \
                     unbuilt lobbies at true scale.",
                )
                .details([
                    "Daylight simulation runs in real time across a full day cycle.",
                ])
                .tags(["visionOS", "RealityKit"])
                .media(MediaStyle::new("var(--media-moss)").slots(MediaSlots::Two)),
                ContentRecord::new(
                    "show-anatomy",
                    "Anatomy Table",
                    "Layered anatomy explorer for a medical school, peeling systems \
                     apart with both hands.",
                )
                .tags(["visionOS", "RealityKit", "Metal"])
                .media(MediaStyle::new("var(--media-violet)").slots(MediaSlots::One)),
            ],
        },
        other_work: Section {
            primary: vec![
                ContentRecord::new(
                    "other-shader-reel",
                    "Shader Reel",
                    "A year of weekly fragment-shader studies, collected as a \
                     looping reel.",
                )
                .tags(["GLSL", "Creative coding"])
                .media(
                    MediaStyle::new("var(--media-tide)")
                        .icon(MediaIcon::Play),
                )
                .display_only(),
                ContentRecord::new(
                    "other-privacy-kit",
                    "Privacy Kit",
                    "Open-source consent and telemetry opt-out toolkit adopted by \
                     a dozen indie apps.",
                )
                .tags(["Swift", "Open source"])
                .media(
                    MediaStyle::new("var(--media-moss)")
                        .icon(MediaIcon::Shield),
                )
                .display_only(),
            ],
            overflow: vec![
                ContentRecord::new(
                    "other-photo-essays",
                    "Photo Essays",
                    "Large-format photography documenting industrial interiors \
                     before demolition.",
                )
                .tags(["Photography"])
                .media(
                    MediaStyle::new("var(--media-ember)")
                        .icon(MediaIcon::Eye),
                )
                .display_only(),
                ContentRecord::new(
                    "other-workshops",
                    "AR Workshops",
                    "Hands-on introduction to spatial interfaces, taught at two \
                     design schools.",
                )
                .tags(["Teaching", "AR"])
                .media(
                    MediaStyle::new("var(--media-violet)")
                        .icon(MediaIcon::Eye),
                )
                .display_only(),
            ],
        },
    }
}

fn french() -> Catalog {
    Catalog {
        headings: Headings {
            hero_subtitle: "Spatial computing & ingénierie XR",
            experience: "Parcours",
            experience_accent: "professionnel",
            showcase: "Réalisations",
            showcase_accent: "choisies",
            other_work: "Autres",
            other_work_accent: "réalisations",
        },
        experience: vec![
            ContentRecord::new(
                "exp-spatial-lab",
                "Développeur XR",
                "Prototypage d'expériences de spatial computing pour des clients \
                 industriels, du croquis au déploiement visionOS.",
            )
            .subtitle("Spatial Lab")
            .period("2023 — aujourd'hui")
            .details([
                "Responsable du cycle complet de trois applications visionOS : \
                 validation du concept, construction des scènes RealityKit et \
                 publication sur l'App Store.",
                "Création d'une bibliothèque d'interactions regard-et-pincement \
                 réutilisée sur tous les projets clients.",
            ])
            .tags(["visionOS", "RealityKit", "SwiftUI", "Swift"]),
            ContentRecord::new(
                "exp-orbital",
                "Ingénieur mobile",
                "Fonctionnalités d'essayage en réalité augmentée pour une \
                 application retail à deux millions d'utilisateurs mensuels.",
            )
            .subtitle("Orbital Studio")
            .period("2021 — 2023")
            .details([
                "Mise en production du pipeline d'essayage par suivi facial, avec \
                 un démarrage à froid ramené de quatre secondes à moins d'une.",
                "Accompagnement de deux ingénieurs juniors jusqu'à leurs premières \
                 mises en production.",
            ])
            .tags(["ARKit", "iOS", "Metal"]),
            ContentRecord::new(
                "exp-freelance",
                "Développeur indépendant",
                "Sites vitrines et configurateurs de produits interactifs pour de \
                 petits studios.",
            )
            .subtitle("Indépendant")
            .period("2019 — 2021")
            .tags(["Web", "Three.js", "Design"]),
        ],
        showcase: Section {
            primary: vec![
                ContentRecord::new(
                    "show-vehicle",
                    "Showcase Véhicule",
                    "Configurateur de véhicule à l'échelle 1 en réalité mixte : \
                     tournez autour, ouvrez les portes, changez les finitions.",
                )
                .details([
                    "Les scènes Reality Composer Pro sont diffusées à la demande \
                     pour garder le téléchargement initial sous 200 Mo.",
                    "Un shader d'occlusion sur mesure ancre le véhicule de façon \
                     convaincante sur n'importe quel sol.",
                ])
                .tags(["visionOS", "RealityKit", "Reality Composer Pro", "SwiftUI"])
                .media(MediaStyle::new("var(--media-aurora)").slots(MediaSlots::Six)),
                ContentRecord::new(
                    "show-turbine",
                    "Visionneuse d'éolienne",
                    "Outil d'inspection en vue éclatée des nacelles d'éoliennes, \
                     utilisé en formation technique.",
                )
                .details([
                    "Chacun des 140 composants peut être isolé, sectionné et \
                     annoté sur place.",
                ])
                .tags(["visionOS", "RealityKit", "SwiftUI"])
                .media(MediaStyle::new("var(--media-tide)").slots(MediaSlots::Two)),
                ContentRecord::new(
                    "show-ceramics",
                    "Visionneuse de céramiques",
                    "Compagnon de musée présentant des céramiques fragiles en \
                     hologrammes de table, commentés par les conservateurs.",
                )
                .details([
                    "Captures photogrammétriques en textures 16K, décimées selon \
                     l'appareil.",
                ])
                .tags(["visionOS", "RealityKit", "Reality Composer Pro"])
                .media(MediaStyle::new("var(--media-ember)").slots(MediaSlots::One)),
            ],
            overflow: vec![
                ContentRecord::new(
                    "show-atrium",
                    "Visite d'atrium",
                    "Pré-visualisation architecturale pour parcourir des halls non \
                     construits à l'échelle réelle.",
                )
                .details([
                    "La simulation de lumière naturelle couvre un cycle de journée \
                     complet en temps réel.",
                ])
                .tags(["visionOS", "RealityKit"])
                .media(MediaStyle::new("var(--media-moss)").slots(MediaSlots::Two)),
                ContentRecord::new(
                    "show-anatomy",
                    "Table d'anatomie",
                    "Explorateur anatomique en couches pour une faculté de \
                     médecine, manipulé à deux mains.",
                )
                .tags(["visionOS", "RealityKit", "Metal"])
                .media(MediaStyle::new("var(--media-violet)").slots(MediaSlots::One)),
            ],
        },
        other_work: Section {
            primary: vec![
                ContentRecord::new(
                    "other-shader-reel",
                    "Bobine de shaders",
                    "Un an d'études hebdomadaires de fragment shaders, rassemblées \
                     en une bobine en boucle.",
                )
                .tags(["GLSL", "Creative coding"])
                .media(
                    MediaStyle::new("var(--media-tide)")
                        .icon(MediaIcon::Play),
                )
                .display_only(),
                ContentRecord::new(
                    "other-privacy-kit",
                    "Privacy Kit",
                    "Boîte à outils open source de consentement et de refus de \
                     télémétrie, adoptée par une douzaine d'applications indé.",
                )
                .tags(["Swift", "Open source"])
                .media(
                    MediaStyle::new("var(--media-moss)")
                        .icon(MediaIcon::Shield),
                )
                .display_only(),
            ],
            overflow: vec![
                ContentRecord::new(
                    "other-photo-essays",
                    "Essais photographiques",
                    "Photographie grand format documentant des intérieurs \
                     industriels avant démolition.",
                )
                .tags(["Photographie"])
                .media(
                    MediaStyle::new("var(--media-ember)")
                        .icon(MediaIcon::Eye),
                )
                .display_only(),
                ContentRecord::new(
                    "other-workshops",
                    "Ateliers RA",
                    "Introduction pratique aux interfaces spatiales, enseignée \
                     dans deux écoles de design.",
                )
                .tags(["Enseignement", "RA"])
                .media(
                    MediaStyle::new("var(--media-violet)")
                        .icon(MediaIcon::Eye),
                )
                .display_only(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn locales() -> [Locale; 2] {
        [Locale::En, Locale::Fr]
    }

    #[test]
    fn showcase_keys_are_unique_across_primary_and_overflow() {
        for locale in locales() {
            let section = catalog(locale).showcase;
            let all = section.all();
            let keys: HashSet<_> = all.iter().map(|r| r.key.as_str()).collect();
            assert_eq!(keys.len(), all.len(), "duplicate key in {locale}");
        }
    }

    #[test]
    fn locales_mirror_each_other_structurally() {
        let en = catalog(Locale::En);
        let fr = catalog(Locale::Fr);
        assert_eq!(en.experience.len(), fr.experience.len());
        assert_eq!(en.showcase.primary.len(), fr.showcase.primary.len());
        assert_eq!(en.showcase.overflow.len(), fr.showcase.overflow.len());
        assert_eq!(en.other_work.primary.len(), fr.other_work.primary.len());
        for (a, b) in en.showcase.all().iter().zip(fr.showcase.all()) {
            // Same keys and media treatment, translated copy.
            assert_eq!(a.key, b.key);
            assert_eq!(a.media.slots, b.media.slots);
        }
    }

    #[test]
    fn primary_showcase_records_carry_details() {
        for locale in locales() {
            for record in catalog(locale).showcase.primary {
                assert!(record.has_details(), "{} lacks details", record.key);
            }
        }
    }

    #[test]
    fn other_work_is_display_only() {
        for locale in locales() {
            for record in catalog(locale).other_work.all() {
                assert!(!record.clickable, "{} should be inert", record.key);
            }
        }
    }

    #[test]
    fn featured_showcase_record_uses_full_media_grid() {
        for locale in locales() {
            let section = catalog(locale).showcase;
            let featured = &section.primary[0];
            assert_eq!(featured.media.slots, MediaSlots::Six);
        }
    }

    #[test]
    fn section_union_preserves_order() {
        let section = catalog(Locale::En).showcase;
        let all = section.all();
        assert_eq!(all[0].key, section.primary[0].key);
        assert_eq!(
            all.last().map(|r| r.key.clone()),
            section.overflow.last().map(|r| r.key.clone())
        );
    }
}
