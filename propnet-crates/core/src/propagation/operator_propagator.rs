use super::PropagationContext;
use super::PropagationStatus;
use super::Propagator;
use crate::basic_types::NetworkError;
use crate::basic_types::OperationError;
use crate::engine::CellId;

/// A propagator which applies the generic operator with the given name to the content of its
/// inputs and adds the result to its output.
///
/// The operator is looked up in the registry of the network every time the propagator runs, so
/// operations which are assigned after the propagator was added are taken into account. The
/// number of inputs has to match the arity of the operator.
#[derive(Clone, Debug)]
pub struct OperatorPropagator {
    name: String,
    operator: String,
    inputs: Vec<CellId>,
    output: CellId,
}

impl OperatorPropagator {
    pub fn new(operator: impl Into<String>, inputs: impl Into<Vec<CellId>>, output: CellId) -> Self {
        let operator = operator.into();

        OperatorPropagator {
            name: operator.clone(),
            operator,
            inputs: inputs.into(),
            output,
        }
    }

    /// Gives the propagator a name other than that of its operator.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn output(&self) -> CellId {
        self.output
    }
}

impl Propagator for OperatorPropagator {
    fn name(&self) -> &str {
        &self.name
    }

    fn inputs(&self) -> &[CellId] {
        &self.inputs
    }

    fn propagate(&self, mut context: PropagationContext) -> PropagationStatus {
        let Some(arguments) = context.contents(&self.inputs) else {
            return Ok(());
        };

        let operator = context.operators().operator(&self.operator)?;
        let result = operator.call(&arguments).map_err(|error| match error {
            OperationError::ArityMismatch {
                operator,
                expected,
                received,
            } => NetworkError::ArityMismatch {
                operator,
                expected,
                received,
            },
            source => NetworkError::PropagatorFailed {
                propagator: self.name.clone(),
                source,
            },
        })?;

        context.add_content(self.output, result)
    }
}
