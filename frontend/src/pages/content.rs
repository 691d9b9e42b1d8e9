//! Copy and records shown on the home page.

#[derive(Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub detailed_description: &'static str,
    pub color: &'static str,
    pub image: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Location {
    pub city: &'static str,
    pub venue: &'static str,
    pub description: &'static str,
}

pub const TAGLINE: &str = "Un espace de soutien personnalisé destiné aux femmes enceintes ainsi qu'à celles souffrant de pathologies gynécologiques.";

pub const VISION: &str = "Notre vision, c'est de proposer une offre à forte valeur humaine, adaptée aux besoins de bien-être, de soulagement et de reconnexion au corps.";

pub const SERVICES: &[Service] = &[
    Service {
        title: "Pathologies gynécologiques",
        description: "Soulager les douleurs gynécologiques par la relaxation et le mouvement doux.",
        detailed_description: "Les pathologies gynécologiques telles que l'endométriose, l'adénomyose ou les troubles menstruels peuvent impacter fortement le quotidien des femmes, tant sur le plan physique qu'émotionnel. Douleurs, fatigue et stress sont souvent présents et nécessitent une prise en charge globale.\n\nNous proposons un accompagnement bien-être complémentaire au suivi médical, basé sur la relaxation, la respiration et des exercices corporels doux. Ces pratiques permettent de mieux gérer les douleurs, de réduire les tensions et de favoriser une meilleure écoute du corps.\n\nChaque accompagnement est personnalisé, dans un cadre bienveillant et respectueux du rythme de chacune, avec pour objectif d'améliorer la qualité de vie et le bien-être au quotidien.\n\nAinsi, notre accompagnement ne vise pas à soigner la maladie, mais à améliorer la qualité de vie, à soutenir le bien-être physique et émotionnel et à accompagner les femmes dans leur quotidien avec plus de sérénité.",
        color: "#e8d5c4",
        image: "/assets/ventre.svg",
    },
    Service {
        title: "Grossesse / Post-partum",
        description: "Accompagner sereinement la grossesse et l'après-naissance par le bien-être corporel.",
        detailed_description: "La grossesse et la période du post-partum sont des étapes importantes de la vie, marquées par de nombreux changements physiques et émotionnels. Fatigue, stress, tensions corporelles ou besoin de recentrage peuvent apparaître à différents moments.\n\nNous proposons un accompagnement bien-être complémentaire au suivi médical, à travers des séances de relaxation, de respiration et des exercices corporels doux, adaptés à chaque étape de la grossesse et après l'accouchement. Ces pratiques favorisent la détente, la connexion au corps et un mieux-être global.\n\nL'accompagnement est personnalisé, dans un cadre bienveillant et sécurisant, afin de soutenir les femmes avant et après la naissance.",
        color: "#d4c8b8",
        image: "/assets/enceinte.svg",
    },
    Service {
        title: "Ménopause",
        description: "Atténuer les symptômes de la ménopause par des pratiques douces adaptées.",
        detailed_description: "La ménopause entraîne de nombreux changements physiques et émotionnels, comme les bouffées de chaleur, la fatigue, les troubles du sommeil ou les fluctuations émotionnelles.\n\nNous proposons un accompagnement bien-être complémentaire, basé sur la relaxation, la respiration et des exercices corporels doux, pour mieux gérer ces symptômes et favoriser un équilibre physique et émotionnel.\n\nChaque accompagnement est personnalisé, dans un cadre bienveillant et sécurisant, afin de soutenir les femmes et améliorer leur qualité de vie au quotidien.",
        color: "#c8b4a6",
        image: "/assets/menopause.svg",
    },
];

pub const ABOUT: &[&str] = &[
    "Nous sommes des jeunes étudiantes en Licence 3 STAPS, spécialité Activité Physique Adaptée et Santé (APA-S). Sensibles aux problématiques de santé et de bien-être féminin, nous avons choisi de créer ce projet à partir d'un constat personnel et professionnel : de nombreuses femmes rencontrent, à différents moments de leur vie, des difficultés physiques, émotionnelles et hormonales encore trop peu prises en compte.",
    "Notre démarche repose sur une approche humaine, bienveillante et individualisée. Nous proposons plusieurs prestations, adaptées aux besoins et aux envies des femmes. Celles-ci peuvent bénéficier de séances individuelles de relaxation et de respiration, d'un accompagnement bien-être personnalisé incluant un temps d'écoute et des exercices corporels doux, ou encore de différents ateliers collectifs à thème, abordant notamment la gestion du stress, de la fatigue ou des douleurs menstruelles.",
    "Ce projet s'inscrit également dans une dynamique d'évolution continue. À terme, nous souhaitons enrichir notre accompagnement par une formation et une intégration progressive de l'acupuncture, afin d'élargir nos possibilités d'intervention et de répondre de manière toujours plus complète aux besoins des femmes. L'obtention d'un certificat en yoga thérapeutique constitue également une perspective de développement, tout comme l'extension de notre offre à destination des jeunes mamans et des personnes souffrant de troubles hormonaux.",
];

pub const ABOUT_CLOSING: &str = "À travers ce projet, notre objectif est d'offrir aux femmes un espace de bien-être, d'écoute et de reconnexion au corps, complémentaire au suivi médical, et adapté à chaque étape de la vie.";

/// (heading, body)
pub const OFFER_DETAILS: &[(&str, &str)] = &[
    (
        "Séances individuelles",
        "Les séances individuelles offrent un accompagnement personnalisé, construit en fonction des besoins, des ressentis et des objectifs de chaque participante. Elles peuvent inclure des techniques de relaxation, de respiration, des exercices corporels doux ainsi qu'un temps d'écoute et d'échange. Ces séances permettent de mieux gérer le stress, les douleurs, la fatigue ou les déséquilibres émotionnels, tout en favorisant une meilleure connexion au corps.",
    ),
    (
        "Ateliers collectifs à thème",
        "Les ateliers collectifs à thème constituent des temps de partage et de pratique en petit groupe, dans un cadre sécurisant et convivial. Ils abordent des thématiques spécifiques telles que la gestion du stress, la fatigue, les douleurs menstruelles ou encore le bien-être féminin au quotidien. Les ateliers allient exercices de respiration, relaxation, mouvements doux et échanges, permettant à chacune de repartir avec des outils simples à réutiliser au quotidien.",
    ),
];

pub const OFFER_CLOSING: &str = "L'ensemble de nos accompagnements s'inscrit dans une démarche complémentaire au suivi médical, avec pour objectif d'aider chaque femme à devenir actrice de son bien-être, à mieux écouter son corps et à retrouver un équilibre durable.";

pub const REGION: &str = "Agglomération grenobloise";

pub const LOCATIONS: &[Location] = &[
    Location {
        city: "Grenoble",
        venue: "Maison des Habitants – Centre-ville / Chorier-Berriat",
        description: "Salle municipale calme et accessible, idéale pour des séances individuelles et des ateliers collectifs de bien-être.",
    },
    Location {
        city: "Échirolles",
        venue: "Maison des Habitants d'Échirolles",
        description: "Espace associatif accueillant, adapté aux pratiques corporelles douces et aux ateliers en petit groupe.",
    },
    Location {
        city: "Saint-Martin-d'Hères",
        venue: "MJC Pablo Picasso",
        description: "Salle polyvalente offrant un cadre sécurisant pour des séances collectives et des temps d'échange.",
    },
    Location {
        city: "Fontaine",
        venue: "Centre social Romain Rolland",
        description: "Lieu de proximité, accessible et propice aux activités de relaxation, respiration et accompagnement bien-être.",
    },
    Location {
        city: "Seyssinet-Pariset",
        venue: "Maison des Habitants de Seyssinet-Pariset",
        description: "Salle lumineuse et calme, adaptée aux ateliers collectifs et aux séances de bien-être féminin.",
    },
    Location {
        city: "Meylan",
        venue: "Maison de quartier des Buclos",
        description: "Espace agréable et facilement accessible, idéal pour des séances personnalisées et des ateliers thématiques.",
    },
    Location {
        city: "La Tronche",
        venue: "Salle communale / Maison de quartier",
        description: "Cadre calme et proche des structures de santé, cohérent avec une approche complémentaire au suivi médical.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;

    #[test]
    fn services_have_distinct_titles_and_hex_colors() {
        assert_eq!(SERVICES.len(), 3);
        let titles: HashSet<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), SERVICES.len());

        for service in SERVICES {
            assert!(service.color.starts_with('#') && service.color.len() == 7);
            assert!(service.detailed_description.contains("\n\n"));
        }
    }

    #[test]
    fn locations_are_unique_cities() {
        let cities: HashSet<_> = LOCATIONS.iter().map(|l| l.city).collect();
        assert_eq!(cities.len(), LOCATIONS.len());
    }

    #[test]
    fn service_images_ship_with_the_site() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        for service in SERVICES {
            let file = root.join(service.image.trim_start_matches('/'));
            assert!(file.is_file(), "missing {}", file.display());
        }
    }
}
