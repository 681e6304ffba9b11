//! Local fallback responder: keyword-matched canned answers.
//!
//! The canned table and the clarification template are verbatim from the
//! workshop material, which seeds the demo with an HR policy document — the
//! keywords cover leave, benefits, policy, schedule, training, and remote
//! work. The table order matters: the first keyword contained in the
//! lower-cased query wins, and multiple matches never merge.

use std::time::Duration;

use async_trait::async_trait;
use log::info;

use crate::answer::{AnswerError, AnswerSource};

/// Fixed artificial "thinking" delay before the canned answer comes back.
pub const FALLBACK_DELAY: Duration = Duration::from_millis(1500);

/// Keyword → canned response, checked in definition order.
const CANNED_RESPONSES: [(&str, &str); 8] = [
    (
        "vacaciones",
        "Según el documento, los empleados tienen derecho a 15 días hábiles de vacaciones \
         anuales, que pueden tomarse previa solicitud con 30 días de anticipación.",
    ),
    (
        "beneficios",
        "Los beneficios incluyen: seguro médico completo, seguro dental, plan de pensiones \
         con contribución del 5% del salario, y descuentos en productos de la empresa.",
    ),
    (
        "política",
        "Las políticas de la empresa están diseñadas para crear un ambiente de trabajo \
         inclusivo y productivo. Incluyen códigos de conducta, procedimientos de recursos \
         humanos y protocolos de seguridad.",
    ),
    (
        "horario",
        "El horario laboral estándar es de lunes a viernes de 9:00 AM a 6:00 PM, con \
         flexibilidad para trabajo remoto hasta 2 días por semana.",
    ),
    (
        "capacitación",
        "La empresa ofrece un presupuesto anual de $2,000 por empleado para capacitación y \
         desarrollo profesional, incluyendo cursos, certificaciones y conferencias.",
    ),
    (
        "remoto",
        "Sí, puedes trabajar desde casa. Según las políticas: trabajo remoto hasta 2 días \
         por semana previa aprobación del supervisor. También hay flexibilidad de horario \
         de ±2 horas con aprobación y trabajo híbrido disponible para roles elegibles.",
    ),
    (
        "casa",
        "Sí, puedes trabajar desde casa. Según las políticas: trabajo remoto hasta 2 días \
         por semana previa aprobación del supervisor. También hay flexibilidad de horario \
         de ±2 horas con aprobación y trabajo híbrido disponible para roles elegibles.",
    ),
    (
        "trabajo",
        "El horario estándar es de lunes a viernes, 9:00 AM - 6:00 PM. Trabajo remoto: \
         hasta 2 días por semana previa aprobación del supervisor. Flexibilidad de \
         horario: ±2 horas con aprobación. Trabajo híbrido disponible para roles elegibles.",
    ),
];

/// First matching keyword (in table order) wins; `None` when nothing matches.
pub fn lookup(query: &str) -> Option<&'static str> {
    let query_lower = query.to_lowercase();
    CANNED_RESPONSES
        .iter()
        .find(|(keyword, _)| query_lower.contains(keyword))
        .map(|(_, response)| *response)
}

/// Generic response echoing the query when no keyword matches.
pub fn clarification(query: &str) -> String {
    format!(
        "He analizado tu consulta \"{query}\". Basándome en el documento procesado, \
         puedo ayudarte con información específica. ¿Podrías ser más específico sobre \
         qué aspecto te interesa conocer?"
    )
}

pub struct KeywordResponder {
    delay: Duration,
}

impl KeywordResponder {
    pub fn new() -> Self {
        Self {
            delay: FALLBACK_DELAY,
        }
    }

    /// Zero (or custom) delay for tests.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerSource for KeywordResponder {
    fn name(&self) -> &str {
        "keyword-fallback"
    }

    async fn answer(&self, query: &str) -> Result<String, AnswerError> {
        tokio::time::sleep(self.delay).await;
        match lookup(query) {
            Some(canned) => {
                info!("Fallback keyword hit for query {:?}", query);
                Ok(canned.to_string())
            }
            None => {
                info!("No keyword match, returning clarification template");
                Ok(clarification(query))
            }
        }
    }
}
