use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    Name,
    Role,
    CreatedAt,
}

#[derive(Iden)]
enum MenuItems {
    Table,
    Id,
    Name,
    Price,
    Category,
    Recipe,
    Image,
}

#[derive(Iden)]
enum CartItems {
    Table,
    Id,
    Email,
    MenuItemId,
    Name,
    Image,
    Price,
}

#[derive(Iden)]
enum Reviews {
    Table,
    Id,
    Name,
    Details,
    Rating,
}

#[derive(Iden)]
enum Payments {
    Table,
    Id,
    Email,
    Total,
    CartIds,
    MenuItemIds,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Email).text().not_null())
                    .col(ColumnDef::new(Users::Name).text())
                    .col(ColumnDef::new(Users::Role).text())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MenuItems::Table)
                    .col(
                        ColumnDef::new(MenuItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MenuItems::Name).text().not_null())
                    .col(ColumnDef::new(MenuItems::Price).double().not_null())
                    .col(ColumnDef::new(MenuItems::Category).text().not_null())
                    .col(ColumnDef::new(MenuItems::Recipe).text())
                    .col(ColumnDef::new(MenuItems::Image).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CartItems::Table)
                    .col(
                        ColumnDef::new(CartItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CartItems::Email).text().not_null())
                    .col(
                        ColumnDef::new(CartItems::MenuItemId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CartItems::Name).text().not_null())
                    .col(ColumnDef::new(CartItems::Image).text())
                    .col(ColumnDef::new(CartItems::Price).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_cart_items_email")
                    .table(CartItems::Table)
                    .col(CartItems::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::Name).text().not_null())
                    .col(ColumnDef::new(Reviews::Details).text().not_null())
                    .col(ColumnDef::new(Reviews::Rating).double().not_null())
                    .to_owned(),
            )
            .await?;

        // The payments table is the ledger: rows are inserted once and never
        // updated or deleted. cart_ids / menu_item_ids are JSON id lists.
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .col(
                        ColumnDef::new(Payments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::Email).text().not_null())
                    .col(ColumnDef::new(Payments::Total).double().not_null())
                    .col(ColumnDef::new(Payments::CartIds).json_binary().not_null())
                    .col(
                        ColumnDef::new(Payments::MenuItemIds)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Payments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_payments_email")
                    .table(Payments::Table)
                    .col(Payments::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CartItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MenuItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
