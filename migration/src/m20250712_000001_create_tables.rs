use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Professeurs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professeurs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professeurs::Nom).string().not_null())
                    .col(ColumnDef::new(Professeurs::Prenom).string().not_null())
                    .col(
                        ColumnDef::new(Professeurs::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professeurs::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        // professeur_id 非空：删除教师时会先删除其学生
        manager
            .create_table(
                Table::create()
                    .table(Eleves::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Eleves::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Eleves::Prenom).string().not_null())
                    .col(ColumnDef::new(Eleves::Nom).string().not_null())
                    .col(ColumnDef::new(Eleves::Moyenne).double().not_null())
                    .col(ColumnDef::new(Eleves::ProfesseurId).big_integer().not_null())
                    .col(ColumnDef::new(Eleves::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Eleves::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Eleves::Table, Eleves::ProfesseurId)
                            .to(Professeurs::Table, Professeurs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        // professeur_id 可空：删除教师时仅清除班级上的引用
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classes::Nom).string().not_null())
                    .col(ColumnDef::new(Classes::ProfesseurId).big_integer().null())
                    .col(ColumnDef::new(Classes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Classes::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::ProfesseurId)
                            .to(Professeurs::Table, Professeurs::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Eleves::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professeurs::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Professeurs {
    Table,
    Id,
    Nom,
    Prenom,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Eleves {
    Table,
    Id,
    Prenom,
    Nom,
    Moyenne,
    ProfesseurId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Classes {
    Table,
    Id,
    Nom,
    ProfesseurId,
    CreatedAt,
    UpdatedAt,
}
