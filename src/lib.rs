pub mod cli;
pub mod modules;
pub mod shared;

use std::sync::Arc;

use cli::Commands;
use modules::vas::{
    application::{ImportOutcome, VasListPage},
    domain::{CodeRepository, VasRepository},
    infrastructure::{
        graphql::{GraphqlCodeRepository, GraphqlTransport, GraphqlVasRepository, HttpGraphqlClient},
        ui::{AutoApproveImportPopup, InMemoryGrid, LogNotifier},
    },
    ImportRow,
};
use shared::{
    errors::{AppError, AppResult},
    utils::logger::init_logger,
    AppConfig,
};

/// Wire the page against the configured GraphQL endpoint
pub fn build_page(config: &AppConfig) -> AppResult<(VasListPage, Arc<InMemoryGrid>)> {
    let transport: Arc<dyn GraphqlTransport> = Arc::new(HttpGraphqlClient::new(config)?);
    let repository: Arc<dyn VasRepository> =
        Arc::new(GraphqlVasRepository::new(Arc::clone(&transport)));
    let code_repository: Arc<dyn CodeRepository> =
        Arc::new(GraphqlCodeRepository::new(Arc::clone(&transport)));

    let grid = Arc::new(InMemoryGrid::new(config.page_size));
    let page = VasListPage::new(
        repository,
        code_repository,
        grid.clone(),
        Arc::new(LogNotifier::new(config.auto_confirm)),
        Arc::new(AutoApproveImportPopup::new()),
    );
    Ok((page, grid))
}

pub async fn run(command: Commands) -> AppResult<()> {
    let config = AppConfig::from_env()?;
    init_logger();
    log::info!("Using GraphQL endpoint {}", config.graphql_url);

    let (mut page, _grid) = build_page(&config)?;
    page.initialize().await;
    page.on_activation_changed(true).await?;

    match command {
        Commands::Export => {
            let export = page.export()?;
            println!("{}", serde_json::to_string_pretty(&export)?);
        }
        Commands::Import { file } => {
            let raw = std::fs::read_to_string(&file).map_err(|e| {
                AppError::InvalidInput(format!("cannot read {}: {}", file.display(), e))
            })?;
            let rows: Vec<ImportRow> = serde_json::from_str(&raw)?;
            match page.import(rows).await? {
                ImportOutcome::Submitted(outcome) => log::info!("Import finished: {:?}", outcome),
                ImportOutcome::Cancelled => log::info!("Import cancelled"),
            }
        }
    }

    page.on_activation_changed(false).await
}
