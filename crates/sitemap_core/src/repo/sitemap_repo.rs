//! Sitemap repository contracts and implementations.
//!
//! # Responsibility
//! - Accept whole-sitemap snapshots for durable storage.
//! - Keep SQL details and ordering behavior inside repository boundary.
//!
//! # Invariants
//! - `save` replaces the stored sitemap atomically; partial writes never land.
//! - Page, section and edge order round-trips through explicit `sort_order`.
//! - Transient render state (selection, drag, dimensions) is not stored.

use crate::db::{ensure_sitemap_schema, DbError};
use crate::model::edge::{Edge, EdgeLine, EdgeStyle};
use crate::model::page::{NodeId, NodeKind, PageNode, Position};
use crate::model::section::Section;
use crate::model::snapshot::SitemapSnapshot;
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Sitemap id used when callers do not name one.
pub const DEFAULT_SITEMAP_ID: &str = "default";

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from sitemap persistence.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite or schema error.
    Db(DbError),
    /// Persisted data cannot be converted to a valid snapshot.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid sitemap data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for whole-sitemap persistence.
pub trait SitemapRepository {
    /// Replaces the stored sitemap with `snapshot`.
    fn save(&self, snapshot: &SitemapSnapshot) -> RepoResult<()>;
    /// Loads the stored sitemap, if one was saved.
    fn load(&self) -> RepoResult<Option<SitemapSnapshot>>;
}

/// Repository that stores nothing.
///
/// `save` logs the snapshot size and always succeeds; `load` finds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSitemapRepository;

impl SitemapRepository for NoopSitemapRepository {
    fn save(&self, snapshot: &SitemapSnapshot) -> RepoResult<()> {
        info!(
            "event=sitemap_save module=repo status=ok backend=noop nodes={} sections={} edges={}",
            snapshot.nodes.len(),
            snapshot.section_count(),
            snapshot.edges.len()
        );
        Ok(())
    }

    fn load(&self) -> RepoResult<Option<SitemapSnapshot>> {
        Ok(None)
    }
}

/// SQLite-backed sitemap repository.
pub struct SqliteSitemapRepository<'conn> {
    conn: &'conn Connection,
    sitemap_id: String,
}

impl<'conn> SqliteSitemapRepository<'conn> {
    /// Creates repository for the default sitemap from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        Self::try_with_id(conn, DEFAULT_SITEMAP_ID)
    }

    /// Creates repository for `sitemap_id` from a migrated connection.
    pub fn try_with_id(conn: &'conn Connection, sitemap_id: impl Into<String>) -> RepoResult<Self> {
        ensure_sitemap_schema(conn)?;
        Ok(Self {
            conn,
            sitemap_id: sitemap_id.into(),
        })
    }

    pub fn sitemap_id(&self) -> &str {
        &self.sitemap_id
    }
}

impl SitemapRepository for SqliteSitemapRepository<'_> {
    fn save(&self, snapshot: &SitemapSnapshot) -> RepoResult<()> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        for table in ["sections", "edges", "pages", "sitemaps"] {
            tx.execute(
                &format!("DELETE FROM {table} WHERE sitemap_id = ?1;"),
                [self.sitemap_id.as_str()],
            )?;
        }
        tx.execute(
            "INSERT INTO sitemaps (sitemap_id) VALUES (?1);",
            [self.sitemap_id.as_str()],
        )?;

        for (page_order, node) in snapshot.nodes.iter().enumerate() {
            tx.execute(
                "INSERT INTO pages (
                    sitemap_id,
                    node_id,
                    kind,
                    label,
                    pos_x,
                    pos_y,
                    sort_order
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    self.sitemap_id,
                    node.id,
                    node.kind.as_str(),
                    node.label,
                    node.position.x,
                    node.position.y,
                    page_order as i64,
                ],
            )?;

            for (section_order, section) in node.sections.iter().enumerate() {
                tx.execute(
                    "INSERT INTO sections (
                        sitemap_id,
                        node_id,
                        section_id,
                        label,
                        description,
                        highlighted,
                        sort_order
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                    params![
                        self.sitemap_id,
                        node.id,
                        section.id,
                        section.label,
                        section.description,
                        section.highlighted,
                        section_order as i64,
                    ],
                )?;
            }
        }

        for (edge_order, edge) in snapshot.edges.iter().enumerate() {
            tx.execute(
                "INSERT INTO edges (
                    sitemap_id,
                    edge_id,
                    source_node_id,
                    target_node_id,
                    stroke_width,
                    line,
                    sort_order
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    self.sitemap_id,
                    edge.id,
                    edge.source,
                    edge.target,
                    edge.style.stroke_width,
                    edge.line.as_str(),
                    edge_order as i64,
                ],
            )?;
        }

        tx.commit()?;
        info!(
            "event=sitemap_save module=repo status=ok backend=sqlite sitemap_id={} nodes={} sections={} edges={}",
            self.sitemap_id,
            snapshot.nodes.len(),
            snapshot.section_count(),
            snapshot.edges.len()
        );
        Ok(())
    }

    fn load(&self) -> RepoResult<Option<SitemapSnapshot>> {
        let exists: Option<String> = self
            .conn
            .query_row(
                "SELECT sitemap_id FROM sitemaps WHERE sitemap_id = ?1;",
                [self.sitemap_id.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        if exists.is_none() {
            return Ok(None);
        }

        let mut sections = load_sections(self.conn, &self.sitemap_id)?;

        let mut stmt = self.conn.prepare(
            "SELECT node_id, kind, label, pos_x, pos_y
             FROM pages
             WHERE sitemap_id = ?1
             ORDER BY sort_order ASC, node_id ASC;",
        )?;
        let mut rows = stmt.query([self.sitemap_id.as_str()])?;
        let mut nodes = Vec::new();
        while let Some(row) = rows.next()? {
            let mut node = parse_page_row(row)?;
            node.sections = sections.remove(&node.id).unwrap_or_default();
            nodes.push(node);
        }

        let mut stmt = self.conn.prepare(
            "SELECT edge_id, source_node_id, target_node_id, stroke_width, line
             FROM edges
             WHERE sitemap_id = ?1
             ORDER BY sort_order ASC, edge_id ASC;",
        )?;
        let mut rows = stmt.query([self.sitemap_id.as_str()])?;
        let mut edges = Vec::new();
        while let Some(row) = rows.next()? {
            edges.push(parse_edge_row(row)?);
        }

        Ok(Some(SitemapSnapshot { nodes, edges }))
    }
}

fn load_sections(conn: &Connection, sitemap_id: &str) -> RepoResult<HashMap<NodeId, Vec<Section>>> {
    let mut stmt = conn.prepare(
        "SELECT node_id, section_id, label, description, highlighted
         FROM sections
         WHERE sitemap_id = ?1
         ORDER BY node_id ASC, sort_order ASC;",
    )?;
    let mut rows = stmt.query([sitemap_id])?;
    let mut by_page: HashMap<NodeId, Vec<Section>> = HashMap::new();
    while let Some(row) = rows.next()? {
        let node_id: String = row.get("node_id")?;
        let highlighted = match row.get::<_, i64>("highlighted")? {
            0 => false,
            1 => true,
            other => {
                return Err(RepoError::InvalidData(format!(
                    "invalid highlighted value `{other}` in sections.highlighted"
                )));
            }
        };
        by_page.entry(node_id).or_default().push(Section {
            id: row.get("section_id")?,
            label: row.get("label")?,
            description: row.get("description")?,
            highlighted,
        });
    }
    Ok(by_page)
}

fn parse_page_row(row: &Row<'_>) -> RepoResult<PageNode> {
    let kind_text: String = row.get("kind")?;
    let kind = NodeKind::parse(&kind_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid page kind `{kind_text}` in pages.kind"))
    })?;
    let position = Position::new(row.get("pos_x")?, row.get("pos_y")?);
    let node_id: String = row.get("node_id")?;
    let label: String = row.get("label")?;
    Ok(PageNode::new(node_id, label, position).with_kind(kind))
}

fn parse_edge_row(row: &Row<'_>) -> RepoResult<Edge> {
    let line_text: String = row.get("line")?;
    let line = EdgeLine::parse(&line_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid edge line `{line_text}` in edges.line"))
    })?;
    Ok(Edge {
        id: row.get("edge_id")?,
        source: row.get("source_node_id")?,
        target: row.get("target_node_id")?,
        style: EdgeStyle {
            stroke_width: row.get("stroke_width")?,
        },
        line,
        selected: false,
    })
}
