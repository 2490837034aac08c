//! Programme of the 2025 Faculty of Engineering week.

use super::{About, Day, EventRecord, ExternalLink, Greeting, HomePage, ImageRef, Media, Schedule};
use crate::carousel::ImageList;
use crate::error::Result;

const VENUE_OLLANTAYTAMBO: &str = "Lugar: Auditorio Ollantaytambo.";
const VENUE_ZOOM: &str = "Lugar: Vía Zoom.";
const BY_ELECTRONICS: &str = "Organiza: Escuela Profesional de Ingeniería Electrónica.";
const BY_CIVIL: &str = "Organiza: Escuela Profesional de Ingeniería Civil.";
const BY_LIBRARY: &str = "Organiza: Biblioteca Virtual de Ingeniería.";
const BY_INDUSTRIAL_AND_CULTURE: &str = "Organiza: Escuela Profesional de Ingeniería Industrial y Unidad de Extensión Cultural y Proyección Social.";
const BY_CULTURE: &str = "Organiza: Unidad de Extensión Cultural y Proyección Social.";

fn single(id: u32, title: &str, description: &str, image: &str) -> EventRecord {
    EventRecord {
        id,
        title: title.to_string(),
        description: description.to_string(),
        media: Media::Single(ImageRef::new(image)),
        links: Vec::new(),
    }
}

fn carousel(id: u32, title: &str, description: &str, images: &[&str]) -> Result<EventRecord> {
    let images = ImageList::new(images.iter().map(|image| ImageRef::new(*image)).collect())?;
    Ok(EventRecord {
        id,
        title: title.to_string(),
        description: description.to_string(),
        media: Media::Carousel(images),
        links: Vec::new(),
    })
}

fn with_links(mut event: EventRecord, links: Vec<ExternalLink>) -> EventRecord {
    event.links = links;
    event
}

fn joined(parts: &[&str]) -> String {
    parts.join(" ")
}

fn monday() -> Result<Day> {
    Ok(Day {
        name: "Lunes".to_string(),
        events: vec![
            with_links(
                carousel(
                    1,
                    "9:30 AM - Acto Oficial de la Semana de la Facultad de Ingeniería",
                    "Ceremonia oficial con izamiento de pabellones por la Banda del Ejército, entonación de himnos y entrega de ofrenda floral. Participaron el Vicerrector Académico Dr. Héctor Hugo Sánchez Carlessi, Vicerrectora de Investigación Dra. Sandra Negro y Decano Dr. Ing. Santiago Fidel Rojas Tuya. Fotografía oficial en la Explanada URP.",
                    &["/BANDA.jpg", "/HIMNO.jpg", "/FLORES.jpg", "/FOTOGRUPAL.jpg"],
                )?,
                vec![
                    ExternalLink::facebook("https://www.facebook.com/share/v/1A7WmP2e3q/")?,
                    ExternalLink::youtube(
                        "https://www.youtube.com/watch?v=k6l8k4Q4tlI&list=PL8jHySzs9Ce-UEq2c_wwpv6KZRiMIaVYh",
                    )?,
                ],
            ),
            carousel(
                2,
                "10:00 AM - Acto Académico de Inauguración",
                &joined(&[
                    "Palabras de bienvenida de la Dra. Ing. Esther Joni Vargas Chang y discurso inaugural del Decano Dr. Ing. Santiago Fidel Rojas Tuya. Saludo del Embajador de Indonesia Sr. Ricky Suhendar y ponencia del Sr. Wahyu Agung Nugroho sobre cooperación Perú-Indonesia (CEPA). Premiación al Mérito Académico para estudiantes destacados 2024-II y 2025-I. Palabras del Rector, presentación del Grupo 'Canta Palma URP' y brindis de honor.",
                    VENUE_OLLANTAYTAMBO,
                ]),
                &[
                    "/AUDITORIO7.jpg",
                    "/AUDITORIO8.jpg",
                    "/AUDITORIO9.jpg",
                    "/PREMIO4.jpg",
                    "/PREMIO5.jpg",
                ],
            )?,
            single(
                3,
                "6:30 PM - Evolución y normativas de las redes de cableado de cobre hacia la fibra óptica",
                &joined(&[
                    "Ing. Álvaro Cayo Urrutia (Alcared SAC) expuso sobre tendencias en infraestructura de telecomunicaciones, migración de cobre a fibra óptica y normativas internacionales. Ventajas técnicas, económicas y de rendimiento de la fibra óptica.",
                    VENUE_OLLANTAYTAMBO,
                    BY_ELECTRONICS,
                ]),
                "/CONFERENCIA1LUNESS.jpg",
            ),
            single(
                4,
                "7:30 PM - Proyectos de ingeniería y oportunidades de desarrollo en la Agencia Espacial del Perú",
                &joined(&[
                    "Mg. Ing. Christian Pereyra Alpas presentó proyectos estratégicos de CONIDA, oportunidades profesionales en el sector aeroespacial peruano, programas de satélites, colaboraciones internacionales y desafíos tecnológicos. Motivación sobre el futuro del sector espacial nacional.",
                    VENUE_OLLANTAYTAMBO,
                    BY_ELECTRONICS,
                ]),
                "/CONFERENCIA2LUNES.jpg",
            ),
            single(
                5,
                "8:30 PM - Investigación en Pequeños Satélites",
                &joined(&[
                    "Ing. Roxana Morán Morales expuso sobre CubeSats y nanosatélites, tecnología que revoluciona el acceso al espacio. Casos de éxito en investigación científica, monitoreo ambiental y telecomunicaciones. Aspectos técnicos de diseño, lanzamiento y aplicaciones para Perú.",
                    VENUE_OLLANTAYTAMBO,
                    BY_ELECTRONICS,
                ]),
                "/CONFERENCIA3LUNESS.jpg",
            ),
        ],
    })
}

fn tuesday() -> Day {
    Day {
        name: "Martes".to_string(),
        events: vec![
            single(
                8,
                "11:30 AM - II Feria ConstruCivil 2025",
                &joined(&[
                    "Feria que reunió empresas constructoras, proveedores y profesionales del sector. Exhibición de tecnología constructiva, maquinaria, software de diseño, materiales sostenibles y sistemas innovadores. Oportunidades laborales y networking entre estudiantes e industria.",
                    "Lugar: 1er piso de la Facultad de Ingeniería.",
                    BY_CIVIL,
                ]),
                "/FERIACIVIL1.jpg",
            ),
            single(
                9,
                "3:00 PM - Conociendo Education Link SAC (vía Zoom)",
                &joined(&[
                    "Mg. Víctor Velasco e Ing. Humberto Ravest presentaron herramientas de Education Link SAC: editoriales internacionales, gestión académica y detección de plagio. Facilitan la investigación y promueven integridad científica.",
                    BY_LIBRARY,
                ]),
                "/CONFERENCIA1MARTES.jpg",
            ),
            single(
                10,
                "4:00 PM - Ingeniería Civil como Eje de la Remediación Ambiental",
                &joined(&[
                    "Ing. Edwin Moisés Pósito Huapaya expuso sobre el rol de la ingeniería civil en remediación ambiental y cierre sostenible de pozos exploratorios. Técnicas de sellado, protección de acuíferos, monitoreo y metodologías ágiles.",
                    VENUE_OLLANTAYTAMBO,
                    BY_CIVIL,
                ]),
                "/CONFERENCIA2MARTESS.jpg",
            ),
            single(
                11,
                "5:00 PM - Fenómeno de la Corrosión en Estructuras de Concreto Armado",
                &joined(&[
                    "Ing. William Baca Escobar abordó la corrosión del acero en concreto armado. Mecanismos de corrosión, factores ambientales, técnicas de prevención, protección catódica y métodos de reparación estructural. Estrategias para estructuras durables.",
                    VENUE_OLLANTAYTAMBO,
                    BY_CIVIL,
                ]),
                "/CONFERENCIA3MARTES1.jpg",
            ),
            single(
                12,
                "6:00 PM - Diseños Sostenibles de Mezclas Asfálticas",
                &joined(&[
                    "Ing. Fabián Cely presentó tendencias en mezclas asfálticas sostenibles: materiales reciclados, aditivos modificadores y asfaltos templados. Criterios de desempeño, durabilidad y economía circular en pavimentos modernos.",
                    VENUE_OLLANTAYTAMBO,
                    BY_CIVIL,
                ]),
                "/CONFERENCIA4MATES.jpg",
            ),
            single(
                13,
                "7:00 PM - Tratamientos Superficiales en Pavimentos",
                &joined(&[
                    "Ing. Reison Huari expuso sobre tratamientos superficiales en pavimentos: sellos asfálticos, micropavimentos y lechadas. Criterios de selección según tipo de vía, tráfico y clima. Beneficios económicos de tratamientos preventivos.",
                    VENUE_OLLANTAYTAMBO,
                    BY_CIVIL,
                ]),
                "/CONFERENCIA5MARETSS.jpg",
            ),
        ],
    }
}

fn wednesday() -> Day {
    Day {
        name: "Miércoles".to_string(),
        events: vec![
            single(
                15,
                "10:00 AM - El Algoritmo Verde y la IA en Infraestructura Sostenible",
                &joined(&[
                    "Dr. Carlos Chavarry Vallejos expuso sobre IA aplicada en infraestructura sostenible. El 'Algoritmo Verde' combina análisis predictivo, optimización de recursos y reducción de impacto ambiental. Casos de éxito y posibilidades en Perú.",
                    VENUE_ZOOM,
                    BY_LIBRARY,
                ]),
                "/CONFERENCIA1MIERCOLES.jpg",
            ),
            single(
                16,
                "11:00 AM - Ian, el Asistente Académico con IA en la Biblioteca Ebook 7/24",
                &joined(&[
                    "Mg. Ángel Revolledo Morán presentó a Ian, asistente académico con IA disponible 24/7. Ayuda a encontrar recursos, generar referencias y resumir artículos instantáneamente. Acelera investigación y mejora productividad académica.",
                    VENUE_ZOOM,
                    BY_LIBRARY,
                ]),
                "/CONFERENICA2MIERCOLESA.jpg",
            ),
            single(
                17,
                "11:30 AM - Futsal Masculino – Etapa Final y Premiación",
                &joined(&[
                    "Final del torneo de Futsal Masculino con partidos emocionantes. Los equipos demostraron técnica, estrategia y espíritu deportivo. Premiación a campeones, subcampeones y jugadores destacados.",
                    "Lugar: Campo deportivo de la Facultad de Biología.",
                    BY_CULTURE,
                ]),
                "/FUTSAL.jpg",
            ),
            single(
                18,
                "12:00 PM - Estrategias de Aprendizaje en la Era Digital con McGraw Hill",
                &joined(&[
                    "Mg. Gustavo Orozco Aragón compartió estrategias de aprendizaje con McGraw Hill: recursos interactivos, evaluación adaptativa y seguimiento académico. Técnicas de estudio basadas en evidencia para mejorar comprensión y retención.",
                    VENUE_ZOOM,
                    BY_LIBRARY,
                ]),
                "/CONFERENCIA3MIERCOLASD.jpg",
            ),
            single(
                20,
                "4:00 PM - IA y Educación Superior: Oportunidades y Desafíos",
                &joined(&[
                    "Mg. Luis Piedra Rubio expuso sobre IA en educación superior. Oportunidades para personalizar aprendizaje, automatizar evaluaciones y mejorar experiencia estudiantil. Desafíos éticos, técnicos y pedagógicos: privacidad, equidad y formación docente.",
                    VENUE_ZOOM,
                    BY_LIBRARY,
                ]),
                "/CONFERENCIA5MIERCOLEA.jpg",
            ),
            single(
                21,
                "5:00 PM - Diseñando Estrategias para Pruebas de Sistemas con IA",
                &joined(&[
                    "Mg. Karen Zully Aylas Torres presentó metodologías para pruebas de software con IA. Testing automatizado, generación de casos de prueba, detección de bugs con machine learning y optimización de QA.",
                    VENUE_ZOOM,
                    BY_LIBRARY,
                ]),
                "/CONFERENCIA6MIERCOLSA.jpg",
            ),
            single(
                22,
                "6:00 PM - Infraestructura de Alto Rendimiento y Aceleradores en la Era de la IA",
                &joined(&[
                    "Dr. Emilio Bustamante Avanzini expuso sobre infraestructura de hardware para IA a gran escala. Arquitecturas de GPUs, TPUs, sistemas distribuidos y aceleradores. Requerimientos para deep learning y consideraciones de costo-beneficio.",
                    VENUE_ZOOM,
                    BY_LIBRARY,
                ]),
                "/CONFERENCIA7MIERCOLEAS.jpg",
            ),
            single(
                24,
                "8:00 PM - Arquitectura de los Vehículos Híbridos y Eléctricos",
                &joined(&[
                    "Ing. Gonzalo Sáenz García expuso sobre arquitectura de vehículos híbridos y eléctricos. Sistemas de propulsión, baterías, motores y regeneración de energía. Tendencias en movilidad sostenible y oportunidades en el sector automotriz.",
                    VENUE_OLLANTAYTAMBO,
                    "Organiza: Escuela Profesional de Ingeniería Mecatrónica.",
                ]),
                "/CONFERNCIA9MIERCOLES.jpg",
            ),
        ],
    }
}

fn thursday() -> Result<Day> {
    Ok(Day {
        name: "Jueves".to_string(),
        events: vec![
            with_links(
                carousel(
                    26,
                    "11:00 AM - Conferencia 'Becas de Postgrado en Indonesia' + Baile tradicional y Muestra de Cultura y Arte",
                    &joined(&[
                        "Embajada de Indonesia presentó becas de postgrado para estudiantes peruanos, programas académicos y requisitos. Incluyó baile tradicional indonesio y muestra de cultura y arte. Oportunidad de intercambio académico y cultural Perú-Indonesia.",
                        VENUE_OLLANTAYTAMBO,
                        BY_INDUSTRIAL_AND_CULTURE,
                    ]),
                    &[
                        "/CONFERENCIA1JUEVES.jpg",
                        "/CONFRENCIA1JUVES}.jpg",
                        "/BAILE1.jpg",
                        "/CNFERENIA111.jpg",
                    ],
                )?,
                vec![ExternalLink::facebook(
                    "https://www.facebook.com/share/v/14KGPERGB6a/",
                )?],
            ),
            single(
                27,
                "3:00 PM - La importancia de la preservación de los recursos hídricos para la ciudad de Lima y Callao",
                &joined(&[
                    "SEDAPAL presentó la gestión y preservación de recursos hídricos en Lima y Callao. Escasez hídrica, fuentes de agua (Rímac, Chillón, Lurín), proyectos de infraestructura, tratamiento de aguas y participación ciudadana. Rol de la ingeniería en soluciones sostenibles.",
                    VENUE_OLLANTAYTAMBO,
                    BY_INDUSTRIAL_AND_CULTURE,
                ]),
                "/CONFERENCIA2.jpg",
            ),
        ],
    })
}

fn friday() -> Result<Day> {
    Ok(Day {
        name: "Viernes".to_string(),
        events: vec![
            carousel(
                32,
                "8:30 AM - 2:00 PM - Gymkhana",
                &joined(&[
                    "Jornada deportiva y recreativa con pruebas físicas, juegos de habilidad y desafíos mentales por equipos. Los participantes acumularon puntos en diferentes estaciones. Promoción de camaradería, espíritu deportivo e integración estudiantil.",
                    "Lugar: Campo deportivo de la Facultad de Biología.",
                    BY_CULTURE,
                ]),
                &[
                    "/GYNKANAVIERNES.jpg",
                    "/GYNKANAVIERNES2.jpg",
                    "/GYNKANAVIERNES3.jpg",
                    "/GYNKANAVIERNES4.jpg",
                ],
            )?,
            with_links(
                carousel(
                    34,
                    "5:30 PM - 6:00 PM - Ceremonia de Clausura de la Semana de la Facultad de Ingeniería",
                    "Cierre oficial de la Semana de Ingeniería. Palabras de bienvenida de la Dra. Ing. Esther Joni Vargas Chang y clausura del Decano Dr. Ing. Santiago Fidel Rojas Tuya. Reconocimiento a docentes con 25 y 50 años de servicio. Premiación del IV Concurso de Fotografía URP. Mensaje inspirador sobre el futuro de la ingeniería peruana y compromiso con la excelencia académica.",
                    &["/CLAUSURA.jpg", "/CLAUSURA2.jpg", "/CLAUSURA3.jpg", "/CLAUSURA4.jpg"],
                )?,
                vec![
                    ExternalLink::facebook("https://www.facebook.com/share/v/17GhxMY7CH/")?,
                    ExternalLink::youtube("https://www.youtube.com/watch?v=Le78gbI1qsU")?,
                ],
            ),
        ],
    })
}

fn home() -> HomePage {
    HomePage {
        tab_label: "Inicio".to_string(),
        greetings: vec![
            Greeting {
                heading: "PRESENTACIÓN Y SALUDO".to_string(),
                portrait: ImageRef::new("/DECANO.jpg"),
                paragraphs: vec![
                    "El Decano de la Facultad de Ingeniería, presenta en esta oportunidad una edición especial de las principales actividades realizadas por el 56° Aniversario de la Facultad de Ingeniería, en donde las Facultad de Ingeniería ha sido unas las de las primeras facultades que se implementaron desde su creación.".to_string(),
                    "A nombre del Consejo de Facultad de Ingeniería, brindamos un cordial saludo a toda la comunidad de la Facultad de Ingeniería, hacemos votos por el continuo crecimiento y desarrollo institucional de nuestra facultad.".to_string(),
                ],
                signatory: "DR. ING. SANTIAGO FIDEL ROJAS TUYA".to_string(),
                role: "DECANO DE LA FACULTAD DE INGENIERÍA".to_string(),
            },
            Greeting {
                heading: "BIBLIOTECA VIRTUAL DE INGENIERÍA".to_string(),
                portrait: ImageRef::new("/CHIOK.jpg"),
                paragraphs: vec![
                    "La Biblioteca Virtual de Ingeniería se enorgullece en ser parte fundamental del desarrollo académico y de investigación de nuestra comunidad universitaria. A través de nuestras plataformas digitales, brindamos acceso a recursos bibliográficos de última generación, bases de datos especializadas y herramientas tecnológicas que impulsan la excelencia académica de nuestros estudiantes y docentes.".to_string(),
                    "Durante la Semana de Ingeniería 2025, presentamos conferencias innovadoras sobre inteligencia artificial, recursos digitales y nuevas tecnologías aplicadas a la educación superior, reafirmando nuestro compromiso con la vanguardia educativa y el apoyo constante a la investigación científica.".to_string(),
                ],
                signatory: "DRA. ALICIA CHIOK GUERRA DE TAIPE".to_string(),
                role: "JEFA DE BIBLIOTECA VIRTUAL DE INGENIERÍA".to_string(),
            },
        ],
        about: About {
            title: "Semana de Ingeniería 2025".to_string(),
            body: "La Semana de la Facultad de Ingeniería de la Universidad Ricardo Palma es el evento académico y cultural más importante del año, donde convergen estudiantes, docentes, profesionales y empresas del sector tecnológico e industrial. Durante cinco días completos, nuestra comunidad universitaria participa en conferencias magistrales, talleres especializados, competencias técnicas, ferias de proyectos y actividades de networking que fortalecen la formación integral de nuestros futuros ingenieros. Este espacio permite el intercambio de conocimientos, la exposición de investigaciones innovadoras y la creación de vínculos entre el mundo académico y el sector empresarial, consolidando el compromiso de la URP con la excelencia educativa y el desarrollo tecnológico del país.".to_string(),
        },
    }
}

impl Schedule {
    /// Builds the 2025 programme.
    ///
    /// Fails only if a carousel list is empty or a link is malformed.
    pub fn engineering_week_2025() -> Result<Self> {
        Ok(Schedule {
            site_title: "Semana de Ingeniería 2025".to_string(),
            day_subtitle: "Eventos de la Semana de Ingeniería".to_string(),
            left_logo: ImageRef::new("/logo_urp.png"),
            right_logo: ImageRef::new("/logo-bvi-blanco.png"),
            home: home(),
            days: vec![monday()?, tuesday(), wednesday(), thursday()?, friday()?],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tabs_start_with_home_then_weekdays() {
        let schedule = Schedule::engineering_week_2025().unwrap();
        assert_eq!(
            schedule.tab_labels(),
            vec!["Inicio", "Lunes", "Martes", "Miércoles", "Jueves", "Viernes"]
        );
    }

    #[test]
    fn event_ids_are_unique() {
        let schedule = Schedule::engineering_week_2025().unwrap();
        let mut seen = HashSet::new();
        for day in &schedule.days {
            for event in &day.events {
                assert!(seen.insert(event.id), "duplicate id {}", event.id);
            }
        }
        assert_eq!(seen.len(), 23);
    }

    #[test]
    fn carousels_and_links_match_programme() {
        let schedule = Schedule::engineering_week_2025().unwrap();
        let monday = &schedule.days[0];

        let opening = &monday.events[0];
        match &opening.media {
            Media::Carousel(images) => {
                assert_eq!(images.len(), 4);
                assert_eq!(images.get(0).map(ImageRef::as_str), Some("/BANDA.jpg"));
            }
            Media::Single(_) => panic!("opening act should be a carousel"),
        }
        assert!(opening.facebook_link().is_some());
        assert!(opening.youtube_link().is_some());

        let fiber = &monday.events[2];
        assert_eq!(
            fiber.media,
            Media::Single(ImageRef::new("/CONFERENCIA1LUNESS.jpg"))
        );
        assert!(fiber.links.is_empty());

        let carousel_count = schedule
            .days
            .iter()
            .flat_map(|day| &day.events)
            .filter(|event| matches!(event.media, Media::Carousel(_)))
            .count();
        assert_eq!(carousel_count, 5);
    }

    #[test]
    fn no_content_points_at_remote_hosts() {
        let schedule = Schedule::engineering_week_2025().unwrap();
        for day in &schedule.days {
            for event in &day.events {
                let remote = match &event.media {
                    Media::Single(image) => image.is_remote(),
                    Media::Carousel(images) => images.iter().any(ImageRef::is_remote),
                };
                assert!(!remote, "event {} uses a remote image", event.id);
            }
        }
    }
}
