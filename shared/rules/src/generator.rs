//! BOM generation
//!
//! Derives the component lines of a product variant, resolves each line's
//! unit of measure and component product, and writes the BOM with its
//! family routing. A rule failure aborts before anything is written.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use forgebom_database::{BomStore, InMemoryCatalog};
use forgebom_models::{
    AttributeSet, BomLine, ComponentList, ProductFamily, RoutingOperation, UnitOfMeasure,
    CFA_METER_KEYWORDS, DEFAULT_METER_KEYWORDS,
};
use forgebom_utils::bom::{BomLineValidator, ValidationSeverity};
use forgebom_utils::{ForgeError, ForgeResult, RulesConfig, TeethTable};

use crate::context::RuleContext;
use crate::{dispatch, routing};

/// Unit of measure of a component within a family's BOM.
pub fn unit_of_measure(family: ProductFamily, component: &str) -> UnitOfMeasure {
    let keywords = match family {
        ProductFamily::CfaAuger => CFA_METER_KEYWORDS,
        _ => DEFAULT_METER_KEYWORDS,
    };
    UnitOfMeasure::for_component(component, keywords)
}

/// A derived line with its unit of measure, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewLine {
    pub name: String,
    pub qty: f64,
    pub uom: UnitOfMeasure,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BomPreview {
    pub family: ProductFamily,
    pub lines: Vec<PreviewLine>,
    pub operations: Vec<RoutingOperation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum GenerationOutcome {
    Created {
        bom_id: Uuid,
        lines: Vec<BomLine>,
    },
    /// The product already has a BOM and its family is never regenerated.
    Skipped { product_id: Uuid },
}

fn database_error(error: impl std::fmt::Display) -> ForgeError {
    ForgeError::database(error.to_string())
}

/// Generates BOMs against a store.
#[derive(Clone)]
pub struct BomGenerator {
    store: Arc<dyn BomStore>,
    teeth_table: Option<Arc<TeethTable>>,
    strict_types: bool,
}

impl BomGenerator {
    pub fn new(store: Arc<dyn BomStore>) -> Self {
        Self {
            store,
            teeth_table: None,
            strict_types: true,
        }
    }

    pub fn with_teeth_table(mut self, table: Arc<TeethTable>) -> Self {
        self.teeth_table = Some(table);
        self
    }

    pub fn with_strict_types(mut self, strict: bool) -> Self {
        self.strict_types = strict;
        self
    }

    pub fn store(&self) -> &dyn BomStore {
        self.store.as_ref()
    }

    /// Generator configured from the rules section, loading the teeth table
    /// when its file exists.
    pub fn from_config(store: Arc<dyn BomStore>, config: &RulesConfig) -> ForgeResult<Self> {
        let mut generator = Self::new(store).with_strict_types(config.strict_types);
        if std::path::Path::new(&config.teeth_table_path).exists() {
            let table = TeethTable::from_path(&config.teeth_table_path)?;
            tracing::info!(
                path = %config.teeth_table_path,
                rows = table.len(),
                "Loaded core barrel teeth table"
            );
            generator = generator.with_teeth_table(Arc::new(table));
        } else {
            tracing::warn!(
                path = %config.teeth_table_path,
                "Teeth table not found, core barrel teeth fall back to one per set"
            );
        }
        Ok(generator)
    }

    async fn catalog(&self) -> ForgeResult<InMemoryCatalog> {
        self.store
            .catalog()
            .await
            .map_err(|e| ForgeError::catalog(e.to_string()))
    }

    fn derive(
        &self,
        family: ProductFamily,
        attrs: &AttributeSet,
        catalog: &InMemoryCatalog,
    ) -> ForgeResult<ComponentList> {
        let mut ctx = RuleContext::new(catalog).with_strict_types(self.strict_types);
        if let Some(table) = self.teeth_table.as_deref() {
            ctx = ctx.with_teeth_table(table);
        }
        let lines = dispatch::derive(family, attrs, &ctx)?;

        let report = BomLineValidator::new().validate(&lines);
        if let Some(issue) = report
            .issues
            .iter()
            .find(|i| i.severity == ValidationSeverity::Error)
        {
            return Err(ForgeError::validation(
                issue.component.as_deref().unwrap_or("lines"),
                issue.message.clone(),
            ));
        }
        if report.summary.duplicate_names > 0 {
            tracing::info!(
                family = %family,
                duplicates = report.summary.duplicate_names,
                "Component appears on more than one line"
            );
        }
        Ok(lines)
    }

    /// Lines and operations a product variant would get, without writing.
    pub async fn preview(
        &self,
        family: ProductFamily,
        attrs: &AttributeSet,
    ) -> ForgeResult<BomPreview> {
        let catalog = self.catalog().await?;
        let lines = self
            .derive(family, attrs, &catalog)?
            .into_iter()
            .map(|line| PreviewLine {
                uom: unit_of_measure(family, &line.name),
                name: line.name,
                qty: line.qty,
            })
            .collect();
        Ok(BomPreview {
            family,
            lines,
            operations: routing::operations(family, attrs),
        })
    }

    /// Derives and writes the BOM of a product variant.
    pub async fn generate(
        &self,
        product_id: Uuid,
        family: ProductFamily,
        reference: &str,
        attrs: &AttributeSet,
    ) -> ForgeResult<GenerationOutcome> {
        let catalog = self.catalog().await?;
        let lines = self.derive(family, attrs, &catalog)?;

        if family == ProductFamily::CoreBarrel
            && self
                .store
                .bom_exists(product_id)
                .await
                .map_err(database_error)?
        {
            tracing::info!(%product_id, "BOM already exists, core barrel not regenerated");
            return Ok(GenerationOutcome::Skipped { product_id });
        }

        let mut tx = self.store.begin().await.map_err(database_error)?;
        let mut bom_lines = Vec::with_capacity(lines.len());
        for line in lines {
            let uom = unit_of_measure(family, &line.name);
            let component_id = tx
                .find_or_create_component(&line.name, uom)
                .await
                .map_err(database_error)?;
            bom_lines.push(BomLine {
                component_id,
                component_name: line.name,
                qty: line.qty,
                uom,
            });
        }

        let operations = routing::operations(family, attrs);
        let bom_id = tx
            .create_bom(product_id, reference, bom_lines.clone(), operations)
            .await
            .map_err(database_error)?;
        tx.commit().await.map_err(database_error)?;

        tracing::info!(
            %bom_id,
            %product_id,
            family = %family,
            line_count = bom_lines.len(),
            "BOM generated"
        );
        Ok(GenerationOutcome::Created {
            bom_id,
            lines: bom_lines,
        })
    }
}
